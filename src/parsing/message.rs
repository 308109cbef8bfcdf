//! Parsing of raw chunks into [`Message`]s.
//!
//! A chunk is the raw text of one logical message: its header line plus any
//! continuation lines, terminators included.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::ExportConfig;
use crate::error::{Result, StatsError};
use crate::message::{Message, MessageKind};

use super::classifier::{HeaderFields, HeaderMatch, HeaderMatcher, strip_terminator};

/// Turns raw chunks into messages.
///
/// # Example
///
/// ```rust
/// use wastats::config::ExportConfig;
/// use wastats::parsing::MessageParser;
/// use wastats::MessageKind;
///
/// let parser = MessageParser::new(&ExportConfig::default())?;
/// let msg = parser.parse("1/1/20, 09:00 - Alice: Hello\nworld\n")?;
///
/// assert_eq!(msg.author, "Alice");
/// assert_eq!(msg.body, "Hello\nworld");
/// assert_eq!(msg.kind, MessageKind::Text);
/// # Ok::<(), wastats::StatsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MessageParser {
    header: HeaderMatcher,
    time_format: String,
    media_omitted_text: String,
}

impl MessageParser {
    pub fn new(config: &ExportConfig) -> Result<Self> {
        Ok(Self::with_matcher(HeaderMatcher::new(config)?, config))
    }

    /// Creates a parser sharing an already compiled header matcher.
    pub fn with_matcher(header: HeaderMatcher, config: &ExportConfig) -> Self {
        Self {
            header,
            time_format: config.time_format.clone(),
            media_omitted_text: config.media_omitted_text.clone(),
        }
    }

    /// Parses one raw chunk.
    pub fn parse(&self, raw_chunk: &str) -> Result<Message> {
        self.parse_at(raw_chunk, 1)
    }

    /// Parses a chunk that started at `line` (1-based) in the transcript.
    ///
    /// `line` is only used for error reporting.
    pub fn parse_at(&self, raw_chunk: &str, line: usize) -> Result<Message> {
        let mut lines = raw_chunk.split_inclusive('\n');
        let first = lines.next().unwrap_or_default();

        let HeaderMatch::Header(fields) = self.header.match_line(first) else {
            return Err(StatsError::malformed_chunk(line, raw_chunk));
        };
        let HeaderFields {
            timestamp,
            author,
            text,
            new_subject,
        } = fields;

        let (kind, body) = match text {
            None => (
                MessageKind::SubjectChange,
                new_subject.unwrap_or_default().to_string(),
            ),
            Some(text) if text == self.media_omitted_text => {
                (MessageKind::Media, text.to_string())
            }
            Some(text) => {
                let mut body = text.to_string();
                for rest in lines {
                    body.push('\n');
                    body.push_str(strip_terminator(rest));
                }
                (MessageKind::Text, body)
            }
        };

        let timestamp = self.parse_timestamp(timestamp)?;
        Ok(Message::new(timestamp, author, body, kind))
    }

    /// Parses header timestamp text. The export has no zone; UTC is assumed.
    pub fn parse_timestamp(&self, input: &str) -> Result<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(input, &self.time_format)
            .map(|naive| naive.and_utc())
            .map_err(|e| StatsError::invalid_timestamp(input, self.time_format.clone(), e))
    }
}
