//! # wastats CLI
//!
//! Prints one line of statistics per author of a WhatsApp chat export.

use std::io;
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use wastats::StatsError;
use wastats::cli::{Args, usage_error};
use wastats::core::write_report;
use wastats::parser::TranscriptParser;

fn main() {
    let args = match <Args as ClapParser>::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            eprintln!("{}", usage_error(&err));
            process::exit(1);
        }
        Err(err) => {
            // --help and --version
            let _ = err.print();
            return;
        }
    };

    init_logging();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), StatsError> {
    tracing::debug!(input = %args.input.display(), "reading transcript");

    let parser = TranscriptParser::new();
    let stats = parser.stats_from_file(&args.input)?;

    write_report(&stats, io::stdout().lock())?;
    Ok(())
}
