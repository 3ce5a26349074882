//! External compiler wrapper.

use super::{classify, command_exists, run, ToolError, ToolOutcome};
use crate::config::ToolSpec;
use std::path::Path;

/// The external compiler process.
///
/// Emits compiled code on stdout, or `ERROR:`-prefixed output on failure.
/// Exit status is not consulted; the marker convention is the contract.
#[derive(Debug, Clone)]
pub struct Compiler {
    spec: ToolSpec,
}

impl Compiler {
    pub fn new(spec: ToolSpec) -> Self {
        Self { spec }
    }

    pub fn is_available(&self) -> bool {
        command_exists(&self.spec.program)
    }

    /// Compile one source document, optionally asking the compiler to minify
    /// its own output.
    pub fn compile(&self, source: &Path, minify: bool) -> Result<ToolOutcome, ToolError> {
        if !self.is_available() {
            return Err(ToolError::NotAvailable {
                program: self.spec.program.clone(),
            });
        }
        Ok(classify(run(&self.spec, source, minify)?))
    }
}
