//! Aggregation and reporting.
//!
//! This module contains:
//! - [`stats`] - Per-author counters ([`ChatStats`], [`AuthorStats`])
//! - [`report`] - The one-line-per-author text report
//!
//! # Quick Start
//!
//! ```rust
//! use wastats::core::{aggregate, render_report};
//! use wastats::parser::TranscriptParser;
//!
//! let messages = TranscriptParser::new().parse_str("1/1/20, 09:00 - Alice: Hello\n")?;
//! let report = render_report(&aggregate(&messages));
//!
//! assert!(report.starts_with("Alice wrote 1 messages"));
//! # Ok::<(), wastats::StatsError>(())
//! ```

pub mod report;
pub mod stats;

pub use report::{render_report, write_report};
pub use stats::{AuthorStats, ChatStats, KindCounts, aggregate};
