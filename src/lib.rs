//! Corpus pipeline for benchmarking compiler implementations.
//!
//! The pipeline turns a tree of raw source documents into a measured corpus:
//!
//! 1. **extract** - copy raw documents into a flat, sequentially numbered
//!    working set
//! 2. **dedup** - delete working-set files whose content is byte-identical to
//!    an already retained file
//! 3. **compile** - run an external compiler per file and persist its output
//! 4. **minify** - run an external minifier per compiled artifact
//! 5. **gzip** - compress minified artifacts with a generic archiver
//! 6. **stats** - aggregate compiled vs. minified byte totals
//!
//! Stages share one corpus root with sibling `raw/`, `cleaned/`, `compiled/`,
//! `minified/` and `gzip/` directories, joined across stages by file base
//! name. Every stage is independently invocable and idempotent by overwrite
//! (except dedup, which deletes).

pub mod cli;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod pipeline;
pub mod tools;

pub use cli::Cli;
pub use config::Config;
pub use corpus::{ArtifactIndex, CorpusLayout, StatsReport};
