//! Corpus directory layout.

use super::StageError;
use std::fs;
use std::path::{Path, PathBuf};

/// The on-disk shape of a corpus: one root with sibling stage directories.
///
/// Each stage exclusively owns the directory it writes to. Directories are
/// created on first access; the raw input tree is the only one that must
/// already exist (see [`CorpusLayout::raw_dir`]).
#[derive(Debug, Clone)]
pub struct CorpusLayout {
    root: PathBuf,
}

impl CorpusLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The raw source tree. Never created; missing input is a structural
    /// failure of the extract stage.
    pub fn raw_dir(&self) -> Result<PathBuf, StageError> {
        let dir = self.root.join("raw");
        if !dir.is_dir() {
            return Err(StageError::MissingInput(dir));
        }
        Ok(dir)
    }

    /// Numbered working set written by extract, pruned by dedup.
    pub fn cleaned_dir(&self) -> Result<PathBuf, StageError> {
        self.ensure(self.root.join("cleaned"))
    }

    /// Compiler output, unminified.
    pub fn compiled_dir(&self) -> Result<PathBuf, StageError> {
        self.ensure(self.root.join("compiled"))
    }

    /// Minifier output (or compiler output when compiler-side minification
    /// was requested).
    pub fn minified_dir(&self) -> Result<PathBuf, StageError> {
        self.ensure(self.root.join("minified"))
    }

    /// Archiver output.
    pub fn gzip_dir(&self) -> Result<PathBuf, StageError> {
        self.ensure(self.root.join("gzip"))
    }

    fn ensure(&self, dir: PathBuf) -> Result<PathBuf, StageError> {
        if !dir.is_dir() {
            fs::create_dir_all(&dir).map_err(|e| StageError::io(&dir, e))?;
        }
        Ok(dir)
    }
}
