//! Archive stage driver.

use super::DriverSummary;
use crate::corpus::{base_name, list_files_sorted, CorpusLayout, StageError};
use crate::tools::{Archiver, ToolError};
use std::fs;

/// Compresses every minified artifact into `gzip/<base>.gz`.
///
/// A subprocess failure is fatal to that file only; a launch failure
/// (archiver missing) is fatal to the stage.
pub struct ArchiveDriver<'a> {
    layout: &'a CorpusLayout,
    archiver: Archiver,
}

impl<'a> ArchiveDriver<'a> {
    pub fn new(layout: &'a CorpusLayout, archiver: Archiver) -> Self {
        Self { layout, archiver }
    }

    pub fn run(&self) -> Result<DriverSummary, StageError> {
        let input = self.layout.minified_dir()?;
        let dest = self.layout.gzip_dir()?;

        let files = list_files_sorted(&input)?;
        let total = files.len();
        let mut summary = DriverSummary::default();

        for (i, file) in files.iter().enumerate() {
            println!("{} / {}", i + 1, total);
            match self.archiver.compress(file) {
                Ok(bytes) => {
                    let target = dest.join(format!("{}.gz", base_name(file)));
                    fs::write(&target, bytes).map_err(|e| StageError::io(&target, e))?;
                    summary.written += 1;
                }
                Err(err @ (ToolError::NotAvailable { .. } | ToolError::Launch { .. })) => {
                    return Err(err.into());
                }
                Err(ToolError::Failed { code, stderr, .. }) => {
                    println!("ERROR: skipping {}", file.display());
                    tracing::warn!(file = %file.display(), code, stderr = %stderr.trim_end(), "archiver failed");
                    summary.skipped += 1;
                }
            }
        }

        Ok(summary)
    }
}
