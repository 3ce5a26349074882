//! Minify stage driver.

use super::{run_marker_stage, DriverSummary};
use crate::corpus::{list_files_sorted, CorpusLayout, StageError};
use crate::tools::Minifier;

/// Runs the external minifier over every compiled artifact.
///
/// Same control flow as [`super::CompileDriver`]: one process per file,
/// marker-convention failures skip the file only.
pub struct MinifyDriver<'a> {
    layout: &'a CorpusLayout,
    minifier: Minifier,
    artifact_ext: &'a str,
}

impl<'a> MinifyDriver<'a> {
    pub fn new(layout: &'a CorpusLayout, minifier: Minifier, artifact_ext: &'a str) -> Self {
        Self {
            layout,
            minifier,
            artifact_ext,
        }
    }

    pub fn run(&self) -> Result<DriverSummary, StageError> {
        let input = self.layout.compiled_dir()?;
        let dest = self.layout.minified_dir()?;

        let files = list_files_sorted(&input)?;
        run_marker_stage(&files, &dest, self.artifact_ext, |file| {
            self.minifier.minify(file)
        })
    }
}
