//! External minifier wrapper.

use super::{classify, command_exists, run, ToolError, ToolOutcome};
use crate::config::ToolSpec;
use std::path::Path;

/// The external minifier process. Same stdout/marker contract as the
/// compiler, but input is an already-compiled artifact.
#[derive(Debug, Clone)]
pub struct Minifier {
    spec: ToolSpec,
}

impl Minifier {
    pub fn new(spec: ToolSpec) -> Self {
        Self { spec }
    }

    pub fn is_available(&self) -> bool {
        command_exists(&self.spec.program)
    }

    /// Minify one compiled artifact.
    pub fn minify(&self, artifact: &Path) -> Result<ToolOutcome, ToolError> {
        if !self.is_available() {
            return Err(ToolError::NotAvailable {
                program: self.spec.program.clone(),
            });
        }
        Ok(classify(run(&self.spec, artifact, false)?))
    }
}
