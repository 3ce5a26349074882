//! Extract stage: copy raw documents into the numbered working set.

use super::{CorpusLayout, StageError};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of one extract run.
#[derive(Debug, Default)]
pub struct ExtractSummary {
    /// Number of files copied into the working set.
    pub copied: usize,
}

/// Copy every `*.<source_ext>` under `raw/` into `cleaned/` as
/// `NNNN.<source_ext>`, zero-padded, numbered from 0 in traversal order.
///
/// Traversal is recursive and lexicographic by relative path, so numbering is
/// deterministic for a fixed source tree. Content is copied untouched.
/// Same-named files already in `cleaned/` are overwritten; files outside the
/// generated range are left alone.
pub fn extract(layout: &CorpusLayout, source_ext: &str) -> Result<ExtractSummary, StageError> {
    let raw = layout.raw_dir()?;
    let cleaned = layout.cleaned_dir()?;

    let mut sources = Vec::new();
    collect_sources(&raw, source_ext, &mut sources)?;

    for (i, source) in sources.iter().enumerate() {
        let target = cleaned.join(format!("{:04}.{}", i, source_ext));
        fs::copy(source, &target).map_err(|e| StageError::io(source, e))?;
    }

    tracing::debug!(count = sources.len(), "working set extracted");
    Ok(ExtractSummary {
        copied: sources.len(),
    })
}

/// Depth-first walk in sorted order, collecting files with the wanted
/// extension.
fn collect_sources(
    dir: &Path,
    source_ext: &str,
    out: &mut Vec<PathBuf>,
) -> Result<(), StageError> {
    let entries = fs::read_dir(dir).map_err(|e| StageError::io(dir, e))?;
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        paths.push(entry.map_err(|e| StageError::io(dir, e))?.path());
    }
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect_sources(&path, source_ext, out)?;
        } else if path.extension().is_some_and(|e| e == source_ext) {
            out.push(path);
        }
    }
    Ok(())
}
