//! External archiver wrapper.

use super::{command_exists, run, ToolError};
use crate::config::ToolSpec;
use std::path::Path;

/// The external compression process (`gzip -c` by default).
///
/// No marker convention here: stdout is an opaque byte stream and exit
/// status is the only failure signal.
#[derive(Debug, Clone)]
pub struct Archiver {
    spec: ToolSpec,
}

impl Archiver {
    pub fn new(spec: ToolSpec) -> Self {
        Self { spec }
    }

    pub fn is_available(&self) -> bool {
        command_exists(&self.spec.program)
    }

    /// Compress one file and return the compressed bytes.
    pub fn compress(&self, path: &Path) -> Result<Vec<u8>, ToolError> {
        if !self.is_available() {
            return Err(ToolError::NotAvailable {
                program: self.spec.program.clone(),
            });
        }
        let output = run(&self.spec, path, false)?;
        if !output.status.success() {
            return Err(ToolError::Failed {
                program: self.spec.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }
        Ok(output.stdout)
    }
}
