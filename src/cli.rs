//! Command-line interface definition using clap.
//!
//! The binary takes exactly one positional argument: the transcript file.

use std::path::PathBuf;

use clap::Parser;

use crate::error::StatsError;

/// Hint printed when the argument count is wrong.
pub const USAGE_HINT: &str = "This program needs exactly one argument: the WhatsApp chat export file.";

/// Per-author message statistics for a WhatsApp chat export.
#[derive(Parser, Debug, Clone)]
#[command(name = "wastats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    wastats \"WhatsApp Chat with Family.txt\"
    RUST_LOG=debug wastats chat.txt")]
pub struct Args {
    /// Path to the exported chat transcript
    pub input: PathBuf,
}

/// Converts a clap parse failure into a usage error.
pub fn usage_error(err: &clap::Error) -> StatsError {
    StatsError::usage(format!("{USAGE_HINT}\n\n{}", err.render()))
}
