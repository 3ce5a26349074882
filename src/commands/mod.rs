//! CLI command handlers.
//!
//! Thin bridge between the parsed CLI and the stage implementations: load
//! the config, apply overrides, run the stage, print the summary lines.

use crate::cli::{print_usage, Cli, Command};
use crate::config::Config;
use crate::corpus::{extract, CorpusLayout, Deduplicator, StatsReport};
use crate::pipeline::{ArchiveDriver, CompileDriver, DriverSummary, MinifyDriver};
use crate::tools::{Archiver, Compiler, Minifier};
use anyhow::Result;
use humansize::{format_size, DECIMAL};

/// Dispatch the parsed CLI.
pub fn run(cli: Cli) -> Result<()> {
    // The usage path performs no work at all, config loading included.
    let command = match cli.command {
        Some(Command::Other(_)) | None => {
            print_usage();
            return Ok(());
        }
        Some(command) => command,
    };

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(root) = cli.root {
        config.corpus.root = root;
    }
    let layout = CorpusLayout::new(config.corpus.root.clone());

    match command {
        Command::All => {
            handle_extract(&layout, &config)?;
            handle_dedup(&layout, &config)?;
            handle_compile(&layout, &config, false)?;
            handle_minify(&layout, &config)?;
        }
        Command::Extract => handle_extract(&layout, &config)?,
        Command::Dedup => handle_dedup(&layout, &config)?,
        Command::Compile { minify } => handle_compile(&layout, &config, minify)?,
        Command::Minify => handle_minify(&layout, &config)?,
        Command::Gzip => handle_gzip(&layout, &config)?,
        Command::Stats => handle_stats(&layout)?,
        Command::Other(_) => unreachable!("handled above"),
    }
    Ok(())
}

fn handle_extract(layout: &CorpusLayout, config: &Config) -> Result<()> {
    println!("Extracting...");
    let summary = extract(layout, &config.corpus.source_ext)?;
    println!("Extracted {} files", summary.copied);
    Ok(())
}

fn handle_dedup(layout: &CorpusLayout, config: &Config) -> Result<()> {
    println!("Deduping...");
    let summary = Deduplicator::run(layout, &config.corpus.source_ext)?;
    println!(
        "Removed {} duplicates, {} files retained",
        summary.removed, summary.retained
    );
    Ok(())
}

fn handle_compile(layout: &CorpusLayout, config: &Config, minify: bool) -> Result<()> {
    if minify {
        println!("Compiling and minifying...");
    } else {
        println!("Compiling raw...");
    }
    let compiler = Compiler::new(config.tools.compiler.clone());
    let summary = CompileDriver::new(layout, compiler, &config.corpus.artifact_ext).run(minify)?;
    print_summary(&summary);
    Ok(())
}

fn handle_minify(layout: &CorpusLayout, config: &Config) -> Result<()> {
    println!("Minifying...");
    let minifier = Minifier::new(config.tools.minifier.clone());
    let summary = MinifyDriver::new(layout, minifier, &config.corpus.artifact_ext).run()?;
    print_summary(&summary);
    Ok(())
}

fn handle_gzip(layout: &CorpusLayout, config: &Config) -> Result<()> {
    println!("GZipping...");
    let archiver = Archiver::new(config.tools.archiver.clone());
    let summary = ArchiveDriver::new(layout, archiver).run()?;
    print_summary(&summary);
    Ok(())
}

fn handle_stats(layout: &CorpusLayout) -> Result<()> {
    let report = StatsReport::compute(layout)?;

    for anomaly in &report.anomalies {
        println!();
        println!("For some reason, the minified size is bigger");
        println!("{} => {}", anomaly.compiled_path.display(), anomaly.compiled_size);
        println!("{} => {}", anomaly.minified_path.display(), anomaly.minified_size);
    }

    println!(
        "Total compiled: {} ({})",
        report.total_compiled,
        format_size(report.total_compiled, DECIMAL)
    );
    println!(
        "Total minified: {} ({})",
        report.total_minified,
        format_size(report.total_minified, DECIMAL)
    );
    Ok(())
}

fn print_summary(summary: &DriverSummary) {
    println!("Done: {} written, {} skipped", summary.written, summary.skipped);
}
