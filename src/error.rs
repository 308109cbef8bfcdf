//! Unified error types for wastats.
//!
//! Every failure in the library is a [`StatsError`]. The transcript is a
//! machine-generated export, so none of these are recovered from: the first
//! error aborts the whole run and no partial report is produced.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for wastats operations.
///
/// # Example
///
/// ```rust
/// use wastats::error::Result;
/// use wastats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, StatsError>;

/// The error type for all wastats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatsError {
    /// An I/O error occurred while opening or reading the transcript.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A completed chunk does not start with a message header.
    ///
    /// This happens when the transcript has text before its first header,
    /// or when notice filtering and header matching disagree on a line.
    #[error("Malformed message at line {line}: {}", preview(.chunk))]
    MalformedChunk {
        /// 1-based line number where the chunk started
        line: usize,
        /// The raw chunk text
        chunk: String,
    },

    /// A header carried a timestamp that does not fit the export format.
    #[error("Invalid timestamp '{input}' (expected format {format}): {source}")]
    InvalidTimestamp {
        /// The timestamp text taken from the header
        input: String,
        /// The chrono format it was parsed with
        format: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A configured pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern source
        pattern: String,
        /// The underlying regex error
        #[source]
        source: Box<regex::Error>,
    },

    /// The command line was used incorrectly.
    #[error("{0}")]
    Usage(String),
}

/// First line of a chunk, shortened for error messages.
fn preview(chunk: &str) -> String {
    const MAX_CHARS: usize = 60;

    let first = chunk.lines().next().unwrap_or_default();
    if first.chars().count() > MAX_CHARS {
        let cut: String = first.chars().take(MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl StatsError {
    /// Creates a malformed chunk error.
    pub fn malformed_chunk(line: usize, chunk: impl Into<String>) -> Self {
        StatsError::MalformedChunk {
            line,
            chunk: chunk.into(),
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(
        input: impl Into<String>,
        format: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        StatsError::InvalidTimestamp {
            input: input.into(),
            format: format.into(),
            source,
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        StatsError::InvalidPattern {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        StatsError::Usage(message.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, StatsError::Io(_))
    }

    /// Returns `true` if this is a malformed chunk error.
    pub fn is_malformed_chunk(&self) -> bool {
        matches!(self, StatsError::MalformedChunk { .. })
    }

    /// Returns `true` if this is a timestamp error.
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, StatsError::InvalidTimestamp { .. })
    }

    /// Returns `true` if this is a usage error.
    pub fn is_usage(&self) -> bool {
        matches!(self, StatsError::Usage(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
