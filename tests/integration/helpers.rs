//! Shared helpers: binary runner, scratch corpora, fake external tools.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run the pipeline binary and capture output.
pub fn run_pipeline(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_pipeline"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute pipeline");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// A scratch corpus with a config file pointing at fake external tools.
///
/// The fake compiler prepends nothing and echoes the source (or `MIN:` when
/// asked to minify); the fake minifier strips whitespace; the fake archiver
/// prepends `GZ:`. All three reject/fail on inputs starting with a magic
/// prefix so failure paths are testable.
pub struct TestCorpus {
    dir: TempDir,
    config_path: PathBuf,
}

#[allow(dead_code)]
impl TestCorpus {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("corpus");
        fs::create_dir_all(&root).unwrap();

        let compiler = write_tool(
            dir.path(),
            "compiler.sh",
            r#"#!/bin/sh
for arg in "$@"; do file="$arg"; done
minify=no
for arg in "$@"; do [ "$arg" = "--minify" ] && minify=yes; done
first=$(head -c 4 "$file")
if [ "$first" = "FAIL" ]; then
  echo "ERROR: broken input"
  exit 0
fi
[ "$minify" = "yes" ] && printf "MIN:"
cat "$file"
"#,
        );
        let minifier = write_tool(
            dir.path(),
            "minifier.sh",
            r#"#!/bin/sh
for arg in "$@"; do file="$arg"; done
first=$(head -c 4 "$file")
if [ "$first" = "FAIL" ]; then
  echo "ERROR: broken input"
  exit 0
fi
tr -d ' \t\n' < "$file"
"#,
        );
        let archiver = write_tool(
            dir.path(),
            "archiver.sh",
            r#"#!/bin/sh
for arg in "$@"; do file="$arg"; done
first=$(head -c 6 "$file")
if [ "$first" = "NOARCH" ]; then
  echo "cannot compress" >&2
  exit 1
fi
printf "GZ:"
cat "$file"
"#,
        );

        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            format!(
                r#"[corpus]
root = "{root}"
source_ext = "svelte"
artifact_ext = "js"

[tools.compiler]
program = "{compiler}"
minify_arg = "--minify"

[tools.minifier]
program = "{minifier}"

[tools.archiver]
program = "{archiver}"
"#,
                root = root.display(),
                compiler = compiler.display(),
                minifier = minifier.display(),
                archiver = archiver.display(),
            ),
        )
        .unwrap();

        Self { dir, config_path }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("corpus")
    }

    /// Write a file under `raw/`, creating intermediate directories.
    pub fn write_raw(&self, rel: &str, content: &str) {
        let path = self.root().join("raw").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Write a file under an arbitrary stage directory.
    pub fn write_stage(&self, stage: &str, name: &str, content: &str) {
        let path = self.root().join(stage).join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn stage_file(&self, stage: &str, name: &str) -> PathBuf {
        self.root().join(stage).join(name)
    }

    /// Run the pipeline binary against this corpus.
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let mut full: Vec<&str> = vec!["--config"];
        let config = self.config_path.to_str().unwrap();
        full.push(config);
        full.extend_from_slice(args);
        run_pipeline(&full)
    }
}

fn write_tool(dir: &Path, name: &str, script: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, script).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    path
}
