//! Streaming segmentation and parsing.
//!
//! Transcripts are read line by line through any [`BufRead`](std::io::BufRead),
//! so memory use is bounded by the longest single message.
//!
//! # Architecture
//!
//! - [`SegmentIterator`] splits the input into [`Segment`]s: dropped system
//!   notices and raw message chunks
//! - [`MessageIterator`] parses each chunk into a [`Message`](crate::Message)
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use wastats::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! let input = "1/1/20, 09:00 - Alice: Hello\n1/1/20, 09:01 - Bob: Hi\n";
//!
//! for result in parser.stream(Cursor::new(input)) {
//!     let msg = result?;
//!     println!("{}: {}", msg.author, msg.body);
//! }
//! # Ok::<(), wastats::StatsError>(())
//! ```

mod messages;
mod segments;

pub use messages::MessageIterator;
pub use segments::{RawChunk, Segment, SegmentIterator};
