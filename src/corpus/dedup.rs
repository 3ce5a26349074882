//! Dedup stage: delete working-set files with duplicate content.
//!
//! Files of different byte size can never be duplicates, so retained files
//! are bucketed by size and full-content comparison only happens within a
//! bucket. The first file encountered in enumeration order is kept; later
//! byte-identical files are deleted in place. Deletion is permanent.

use super::{list_files_sorted, CorpusLayout, StageError};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of one dedup run.
#[derive(Debug, Default)]
pub struct DedupSummary {
    /// Files retained in the working set.
    pub retained: usize,
    /// Duplicate files deleted.
    pub removed: usize,
}

/// Streaming deduplicator over a fixed enumeration order.
#[derive(Debug, Default)]
pub struct Deduplicator {
    buckets: HashMap<u64, Vec<PathBuf>>,
    removed_count: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of files deleted so far.
    pub fn removed_count(&self) -> usize {
        self.removed_count
    }

    /// Process one file: delete it if its content matches a file already
    /// retained, otherwise retain it. Returns true when the file was a
    /// duplicate and has been deleted.
    pub fn process(&mut self, path: &Path) -> Result<bool, StageError> {
        let size = fs::metadata(path).map_err(|e| StageError::io(path, e))?.len();
        let bucket = self.buckets.entry(size).or_default();

        if !bucket.is_empty() {
            let content = fs::read(path).map_err(|e| StageError::io(path, e))?;
            for retained in bucket.iter() {
                let candidate = fs::read(retained).map_err(|e| StageError::io(retained, e))?;
                if candidate == content {
                    println!("Duplicate! {}", path.display());
                    fs::remove_file(path).map_err(|e| StageError::io(path, e))?;
                    self.removed_count += 1;
                    return Ok(true);
                }
            }
        }

        bucket.push(path.to_path_buf());
        Ok(false)
    }

    /// Deduplicate the whole working set, enumerating `cleaned/` in sorted
    /// order and filtering on the source extension.
    pub fn run(layout: &CorpusLayout, source_ext: &str) -> Result<DedupSummary, StageError> {
        let cleaned = layout.cleaned_dir()?;
        let mut dedup = Self::new();
        let mut retained = 0usize;

        for file in list_files_sorted(&cleaned)? {
            if !file.extension().is_some_and(|e| e == source_ext) {
                continue;
            }
            if !dedup.process(&file)? {
                retained += 1;
            }
        }

        tracing::debug!(retained, removed = dedup.removed_count, "dedup finished");
        Ok(DedupSummary {
            retained,
            removed: dedup.removed_count,
        })
    }
}
