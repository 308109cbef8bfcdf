//! Export format configuration.
//!
//! [`ExportConfig`] holds every pattern, format string and sentinel that
//! describes the transcript format. It is plain data: build it once, then
//! compile it into a [`LineClassifier`](crate::parsing::LineClassifier)
//! and a [`MessageParser`](crate::parsing::MessageParser).
//!
//! # Example
//!
//! ```rust
//! use wastats::config::ExportConfig;
//! use wastats::parser::TranscriptParser;
//!
//! let config = ExportConfig::new()
//!     .with_media_omitted_text("<Medien weggelassen>")
//!     .with_notice_pattern(r"[^:]+? left");
//!
//! let parser = TranscriptParser::with_config(config)?;
//! # Ok::<(), wastats::StatsError>(())
//! ```

use serde::{Deserialize, Serialize};

/// Header prefix of the Android export: `D/M/Y, H:MM`.
pub const DEFAULT_HEADER_PREFIX: &str = r"\d+/\d+/\d+, \d+:\d+";

/// chrono format matching [`DEFAULT_HEADER_PREFIX`].
pub const DEFAULT_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// Body the export writes in place of an attachment.
pub const DEFAULT_MEDIA_OMITTED_TEXT: &str = "<Media omitted>";

/// System notices written by the export tool itself.
pub const DEFAULT_NOTICE_PATTERNS: &[&str] = &[
    r"Messages to this group are now secured with end-to-end encryption\. Tap for more info\.",
    r"[^:]+? added .+",
    r#"[^:]+? created group ".*""#,
];

/// Configuration for WhatsApp plaintext export parsing.
///
/// The defaults describe the Android export with day-first dates and a
/// 24-hour clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Regex for the `<date>, <time>` part of a header (no anchors, no groups)
    pub header_prefix: String,

    /// chrono format for the text matched by `header_prefix`
    pub time_format: String,

    /// Exact body marking an omitted attachment (default: `<Media omitted>`)
    pub media_omitted_text: String,

    /// Regexes for the part of a system notice after `<date>, <time> - `
    pub notice_patterns: Vec<String>,

    /// Reader buffer size in bytes (default: 64KB)
    pub buffer_size: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            header_prefix: DEFAULT_HEADER_PREFIX.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            media_omitted_text: DEFAULT_MEDIA_OMITTED_TEXT.to_string(),
            notice_patterns: DEFAULT_NOTICE_PATTERNS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header prefix regex and the matching chrono format.
    #[must_use]
    pub fn with_timestamp_format(
        mut self,
        header_prefix: impl Into<String>,
        time_format: impl Into<String>,
    ) -> Self {
        self.header_prefix = header_prefix.into();
        self.time_format = time_format.into();
        self
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_omitted_text(mut self, text: impl Into<String>) -> Self {
        self.media_omitted_text = text.into();
        self
    }

    /// Adds a system notice pattern.
    #[must_use]
    pub fn with_notice_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.notice_patterns.push(pattern.into());
        self
    }

    /// Removes all system notice patterns.
    #[must_use]
    pub fn without_notice_patterns(mut self) -> Self {
        self.notice_patterns.clear();
        self
    }

    /// Sets the reader buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}
