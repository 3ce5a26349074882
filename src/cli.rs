//! Command-line interface definition.
//!
//! Exported from the library so `xtask` can generate a man page from the
//! same clap definition the binary parses with.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Corpus pipeline for benchmarking compiler implementations.
#[derive(Debug, Parser)]
#[command(name = "pipeline", version, about, disable_help_subcommand = true)]
pub struct Cli {
    /// Corpus root directory (overrides the configured root).
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Path to an alternate config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One independently invocable pipeline stage.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run extract, dedup, compile and minify in sequence.
    All,
    /// Copy raw source documents into the numbered working set.
    Extract,
    /// Delete working-set files with duplicate content.
    Dedup,
    /// Compile every working-set file with the external compiler.
    Compile {
        /// Ask the compiler itself to minify its output.
        #[arg(long)]
        minify: bool,
    },
    /// Minify every compiled artifact with the external minifier.
    Minify,
    /// Compress every minified artifact with the archiver.
    Gzip,
    /// Print aggregate compiled/minified byte totals and anomalies.
    Stats,
    /// Anything unrecognized falls through to the usage message.
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Two-line usage message for missing or unknown subcommands.
///
/// Printing this is a no-op informational path, not a process failure.
pub fn print_usage() {
    println!("pipeline all|extract|dedup|compile [--minify]|minify|gzip|stats");
    println!("NOTE: a full run is pretty slow. Might want to make yourself a cuppa :)");
}
