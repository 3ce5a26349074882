//! External process wrappers for the compiler, minifier and archiver.
//!
//! Each wrapper runs one blocking subprocess per input file with a
//! parameterized argument vector (never a shell string, so file paths with
//! shell metacharacters cannot inject commands) and captures standard output
//! in full before returning.

mod archiver;
mod compiler;
mod minifier;

pub use archiver::Archiver;
pub use compiler::Compiler;
pub use minifier::Minifier;

use crate::config::ToolSpec;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Literal prefix on standard output that marks a per-file failure.
///
/// Known ambiguity, preserved for compatibility with existing corpora:
/// legitimate output that happens to start with this text is classified as a
/// failure too. The external tools define no other success signal.
pub const FAILURE_MARKER: &str = "ERROR:";

/// Errors fatal to the calling stage (as opposed to per-file rejections,
/// which are [`ToolOutcome::Rejected`] values).
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("'{program}' not found in PATH")]
    NotAvailable { program: String },

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with status {code}: {stderr}")]
    Failed {
        program: String,
        code: i32,
        stderr: String,
    },
}

/// Outcome of a compiler or minifier invocation.
#[derive(Debug)]
pub enum ToolOutcome {
    /// Standard output, to be written verbatim as the artifact.
    Output(String),
    /// Output began with [`FAILURE_MARKER`]; the file is skipped.
    Rejected(String),
}

/// Check whether a command exists on the system.
pub fn command_exists(program: &str) -> bool {
    // Absolute or relative paths don't resolve through PATH
    if program.contains(std::path::MAIN_SEPARATOR) {
        return Path::new(program).exists();
    }
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run a tool over one input file and capture its output.
///
/// Invocation shape: `program args.. [minify_arg] [file_arg] <path>`.
fn run(spec: &ToolSpec, path: &Path, minify: bool) -> Result<Output, ToolError> {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    if minify {
        if let Some(flag) = &spec.minify_arg {
            cmd.arg(flag);
        }
    }
    if let Some(flag) = &spec.file_arg {
        cmd.arg(flag);
    }
    cmd.arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    tracing::debug!(program = %spec.program, path = %path.display(), "invoking tool");
    cmd.output().map_err(|e| ToolError::Launch {
        program: spec.program.clone(),
        source: e,
    })
}

/// Classify captured stdout by the failure-marker convention.
fn classify(output: Output) -> ToolOutcome {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    if stdout.starts_with(FAILURE_MARKER) {
        ToolOutcome::Rejected(stdout)
    } else {
        ToolOutcome::Output(stdout)
    }
}
