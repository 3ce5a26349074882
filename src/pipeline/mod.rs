//! Per-file stage drivers: compile, minify, archive.
//!
//! Each driver enumerates its input directory in sorted order and runs one
//! blocking subprocess per file, printing `i / total` (1-based) progress as
//! it goes. A rejected file prints `ERROR: skipping <path>` and the run
//! continues; that per-file line is a compatibility contract for tooling
//! that scrapes stage output.

mod archive;
mod compile;
mod minify;

pub use archive::ArchiveDriver;
pub use compile::CompileDriver;
pub use minify::MinifyDriver;

use crate::corpus::StageError;
use crate::tools::ToolOutcome;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-stage outcome tally.
#[derive(Debug, Default)]
pub struct DriverSummary {
    /// Artifacts written.
    pub written: usize,
    /// Files skipped after a rejected tool invocation.
    pub skipped: usize,
}

/// Shared loop for the two marker-convention stages (compile, minify).
///
/// `invoke` runs the external tool for one file; a launch failure aborts the
/// stage, a rejection only skips the file.
fn run_marker_stage(
    files: &[PathBuf],
    dest: &Path,
    artifact_ext: &str,
    mut invoke: impl FnMut(&Path) -> Result<ToolOutcome, crate::tools::ToolError>,
) -> Result<DriverSummary, StageError> {
    let total = files.len();
    let mut summary = DriverSummary::default();

    for (i, file) in files.iter().enumerate() {
        println!("{} / {}", i + 1, total);
        match invoke(file)? {
            ToolOutcome::Output(code) => {
                let target = dest.join(format!("{}.{}", crate::corpus::base_name(file), artifact_ext));
                fs::write(&target, code).map_err(|e| StageError::io(&target, e))?;
                summary.written += 1;
            }
            ToolOutcome::Rejected(output) => {
                println!("ERROR: skipping {}", file.display());
                tracing::debug!(file = %file.display(), output = %output.trim_end(), "tool rejected file");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
