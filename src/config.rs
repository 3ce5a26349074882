//! Pipeline configuration.
//!
//! Loaded from a TOML file in the platform config directory (or a path given
//! on the command line). Every field carries a serde default, so a missing or
//! partial file still yields a working configuration. The corpus root is part
//! of the config and is threaded explicitly into every stage; no stage reads
//! the process working directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors from loading or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub tools: ToolsConfig,
}

/// Corpus location and file-type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Root directory holding raw/, cleaned/, compiled/, minified/ and gzip/.
    pub root: PathBuf,
    /// Extension of raw source documents (no leading dot).
    pub source_ext: String,
    /// Extension of compiled artifacts (no leading dot).
    pub artifact_ext: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("corpus"),
            source_ext: "svelte".to_string(),
            artifact_ext: "js".to_string(),
        }
    }
}

/// External tool commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub compiler: ToolSpec,
    pub minifier: ToolSpec,
    pub archiver: ToolSpec,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            compiler: ToolSpec {
                program: "node".to_string(),
                args: vec![
                    "test.mjs".to_string(),
                    "--only_js".to_string(),
                    "--show_output".to_string(),
                ],
                file_arg: Some("--filename".to_string()),
                minify_arg: Some("--minify".to_string()),
            },
            minifier: ToolSpec {
                program: "node".to_string(),
                args: vec!["minify.mjs".to_string()],
                file_arg: Some("--filename".to_string()),
                minify_arg: None,
            },
            archiver: ToolSpec {
                program: "gzip".to_string(),
                args: vec!["-c".to_string()],
                file_arg: None,
                minify_arg: None,
            },
        }
    }
}

/// How to invoke one external tool.
///
/// The input path is always passed as a plain exec argument (after
/// `file_arg` when one is configured), never interpolated into a shell
/// string, so paths with shell metacharacters are safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSpec {
    /// Program to execute (resolved via PATH).
    pub program: String,
    /// Fixed arguments placed before any per-file arguments.
    pub args: Vec<String>,
    /// Flag preceding the input file path, if the tool wants one.
    pub file_arg: Option<String>,
    /// Flag requesting tool-side minification (compiler only).
    pub minify_arg: Option<String>,
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("corpusbench").join("config.toml"))
    }

    /// Load from the given path, or the default location.
    ///
    /// A missing file is not an error; it yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write the configuration to its default location, creating parents.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str)?;
        Ok(())
    }
}
