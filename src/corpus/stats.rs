//! Stats stage: aggregate compiled vs. minified byte totals.
//!
//! Read-only. Only base names present in both the compiled and minified sets
//! contribute; an entry missing its counterpart is silently skipped so stages
//! can be run out of order.

use super::{ArtifactIndex, CorpusLayout, StageError};
use std::fs;
use std::path::PathBuf;

/// A minified artifact that failed to get smaller.
#[derive(Debug, Clone)]
pub struct Anomaly {
    pub compiled_path: PathBuf,
    pub compiled_size: u64,
    pub minified_path: PathBuf,
    pub minified_size: u64,
}

/// Aggregate size report, derived fresh on every run and never persisted.
#[derive(Debug, Default)]
pub struct StatsReport {
    pub total_compiled: u64,
    pub total_minified: u64,
    /// Entries where the minified artifact is not strictly smaller than its
    /// compiled counterpart.
    pub anomalies: Vec<Anomaly>,
    /// Base names that contributed to the totals.
    pub counted: usize,
}

impl StatsReport {
    /// Compute the report over the current artifact index.
    pub fn compute(layout: &CorpusLayout) -> Result<Self, StageError> {
        let index = ArtifactIndex::scan(layout)?;
        let mut report = Self::default();

        for (_base, entry) in index.iter() {
            let (Some(compiled), Some(minified)) = (&entry.compiled, &entry.minified) else {
                continue;
            };
            let compiled_size = fs::metadata(compiled)
                .map_err(|e| StageError::io(compiled, e))?
                .len();
            let minified_size = fs::metadata(minified)
                .map_err(|e| StageError::io(minified, e))?
                .len();

            report.total_compiled += compiled_size;
            report.total_minified += minified_size;
            report.counted += 1;

            if minified_size >= compiled_size {
                report.anomalies.push(Anomaly {
                    compiled_path: compiled.clone(),
                    compiled_size,
                    minified_path: minified.clone(),
                    minified_size,
                });
            }
        }

        Ok(report)
    }
}
