//! Corpus state: directory layout, artifact index, and the stages that
//! operate purely on files (extract, dedup, stats).
//!
//! All correspondence between stage outputs is by file base name (extension
//! stripped); the [`ArtifactIndex`] makes that join explicit instead of
//! leaving it implicit in naming convention.

mod dedup;
mod extract;
mod index;
mod layout;
mod stats;

pub use dedup::{DedupSummary, Deduplicator};
pub use extract::{extract, ExtractSummary};
pub use index::{ArtifactEntry, ArtifactIndex};
pub use layout::CorpusLayout;
pub use stats::{Anomaly, StatsReport};

use std::path::{Path, PathBuf};

/// Errors fatal to a single stage invocation.
///
/// Per-file compiler/minifier rejections are not errors; they are skipped
/// items reported in the stage summary.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("Input directory not found: {0}")]
    MissingInput(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Tool(#[from] crate::tools::ToolError),
}

impl StageError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Files directly inside `dir`, sorted by name.
///
/// Subdirectories are ignored; stage directories are flat by construction.
pub(crate) fn list_files_sorted(dir: &Path) -> Result<Vec<PathBuf>, StageError> {
    let entries = std::fs::read_dir(dir).map_err(|e| StageError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StageError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Base name of a path: file name with the extension stripped.
///
/// This is the join key across compiled, minified and archived artifacts.
pub(crate) fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
