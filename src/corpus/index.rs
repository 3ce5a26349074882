//! Base-name keyed index over the artifact directories.
//!
//! Built once per stage invocation by a single scan of each directory. The
//! base name is the join key: `compiled/0001.js`, `minified/0001.js` and
//! `gzip/0001.gz` all belong to entry `0001`.

use super::{base_name, CorpusLayout, StageError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Artifact paths known for one base name. Stages run independently, so any
/// subset may be present.
#[derive(Debug, Clone, Default)]
pub struct ArtifactEntry {
    pub compiled: Option<PathBuf>,
    pub minified: Option<PathBuf>,
    pub archive: Option<PathBuf>,
}

/// Map from base name to its artifacts, in sorted base-name order.
#[derive(Debug, Default)]
pub struct ArtifactIndex {
    entries: BTreeMap<String, ArtifactEntry>,
}

impl ArtifactIndex {
    /// Scan the compiled, minified and gzip directories. A directory that
    /// does not exist yet contributes nothing; only a later stage would
    /// create it.
    pub fn scan(layout: &CorpusLayout) -> Result<Self, StageError> {
        let mut index = Self::default();
        index.scan_dir(&layout.root().join("compiled"), |e, p| e.compiled = Some(p))?;
        index.scan_dir(&layout.root().join("minified"), |e, p| e.minified = Some(p))?;
        index.scan_dir(&layout.root().join("gzip"), |e, p| e.archive = Some(p))?;
        Ok(index)
    }

    fn scan_dir(
        &mut self,
        dir: &Path,
        assign: impl Fn(&mut ArtifactEntry, PathBuf),
    ) -> Result<(), StageError> {
        if !dir.is_dir() {
            return Ok(());
        }
        for path in super::list_files_sorted(dir)? {
            let entry = self.entries.entry(base_name(&path)).or_default();
            assign(entry, path);
        }
        Ok(())
    }

    pub fn get(&self, base: &str) -> Option<&ArtifactEntry> {
        self.entries.get(base)
    }

    /// Entries in sorted base-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArtifactEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
