//! Compile stage driver.

use super::{run_marker_stage, DriverSummary};
use crate::corpus::{list_files_sorted, CorpusLayout, StageError};
use crate::tools::Compiler;

/// Runs the external compiler over every file in the working set.
pub struct CompileDriver<'a> {
    layout: &'a CorpusLayout,
    compiler: Compiler,
    artifact_ext: &'a str,
}

impl<'a> CompileDriver<'a> {
    pub fn new(layout: &'a CorpusLayout, compiler: Compiler, artifact_ext: &'a str) -> Self {
        Self {
            layout,
            compiler,
            artifact_ext,
        }
    }

    /// Compile every working-set file. With `minify` set, the compiler is
    /// asked to minify its own output and artifacts land in `minified/`
    /// instead of `compiled/`.
    pub fn run(&self, minify: bool) -> Result<DriverSummary, StageError> {
        let input = self.layout.cleaned_dir()?;
        let dest = if minify {
            self.layout.minified_dir()?
        } else {
            self.layout.compiled_dir()?
        };

        let files = list_files_sorted(&input)?;
        run_marker_stage(&files, &dest, self.artifact_ext, |file| {
            self.compiler.compile(file, minify)
        })
    }
}
