//! # wastats
//!
//! Per-author statistics for WhatsApp plaintext chat exports.
//!
//! ## Overview
//!
//! A WhatsApp export is a text file with one header line per message:
//!
//! ```text
//! 15/01/2024, 10:30 - Alice: Hello
//! this line still belongs to Alice's message
//! 15/01/2024, 10:31 - Bob: <Media omitted>
//! 15/01/2024, 10:32 - Bob changed the subject from "Old" to "New"
//! ```
//!
//! Message bodies may span several lines, so each line is classified as a
//! system notice (dropped), a header (starts a new message) or a
//! continuation. Completed chunks are parsed into [`Message`]s, which are
//! then folded into per-author counts.
//!
//! ## Quick Start
//!
//! ```rust
//! use wastats::prelude::*;
//!
//! let input = "1/1/20, 09:00 - Alice: Hello\n1/1/20, 09:01 - Bob: <Media omitted>\n";
//!
//! let messages = TranscriptParser::new().parse_str(input)?;
//! let stats = aggregate(&messages);
//!
//! for line in render_report(&stats).lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), wastats::StatsError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the entry point
//! - [`parsing`] - [`LineClassifier`](parsing::LineClassifier) and
//!   [`MessageParser`](parsing::MessageParser)
//! - [`streaming`] - line-by-line [`SegmentIterator`](streaming::SegmentIterator)
//!   and [`MessageIterator`](streaming::MessageIterator)
//! - [`core`] - [`aggregate`](core::aggregate), [`ChatStats`](core::ChatStats),
//!   report rendering
//! - [`config`] - [`ExportConfig`](config::ExportConfig)
//! - [`error`] - [`StatsError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod streaming;

// Re-export the main types at the crate root for convenience
pub use error::{Result, StatsError};
pub use message::{Message, MessageKind};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use wastats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, StatsError};
    pub use crate::message::{Message, MessageKind};

    pub use crate::config::ExportConfig;
    pub use crate::parser::TranscriptParser;
    pub use crate::parsing::{LineClassifier, MessageParser};

    pub use crate::core::{AuthorStats, ChatStats, aggregate, render_report, write_report};
}
