//! Message types produced by the transcript parser.
//!
//! A [`Message`] is one logical, author-attributed event in the transcript.
//! It may have spanned several physical lines in the export; by the time it
//! is a `Message` the lines have been joined and the header stripped.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use wastats::{Message, MessageKind};
//!
//! let ts = Utc.with_ymd_and_hms(2020, 1, 1, 9, 0, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "Hello", MessageKind::Text);
//!
//! assert_eq!(msg.author(), "Alice");
//! assert!(msg.is_text());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed classification of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Ordinary text written by the author.
    Text,
    /// An attachment that the export replaced by a placeholder.
    Media,
    /// The author renamed the group. The body holds the new subject.
    SubjectChange,
}

impl MessageKind {
    /// Number of variants. Used to size per-kind counters.
    pub const COUNT: usize = 3;

    /// Returns all kinds in report order.
    pub fn all() -> &'static [MessageKind; MessageKind::COUNT] {
        &[
            MessageKind::Text,
            MessageKind::Media,
            MessageKind::SubjectChange,
        ]
    }

    /// Position of this kind in [`MessageKind::all`].
    pub fn index(self) -> usize {
        match self {
            MessageKind::Text => 0,
            MessageKind::Media => 1,
            MessageKind::SubjectChange => 2,
        }
    }

    /// Name used in reports and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Text => "text",
            MessageKind::Media => "media",
            MessageKind::SubjectChange => "subject_change",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(MessageKind::Text),
            "media" => Ok(MessageKind::Media),
            "subject_change" => Ok(MessageKind::SubjectChange),
            _ => Err(format!(
                "Unknown message kind: '{}'. Expected one of: text, media, subject_change",
                s
            )),
        }
    }
}

/// One parsed message from a chat transcript.
///
/// Messages are created once by the parser and never mutated afterwards.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `DateTime<Utc>` | When the message was sent (export has no zone) |
/// | `author` | `String` | Display name, compared exactly |
/// | `body` | `String` | Text, media placeholder, or new subject |
/// | `kind` | [`MessageKind`] | Classification |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,

    /// Display name of the author.
    pub author: String,

    /// Message text. May contain newlines for multiline messages.
    pub body: String,

    /// Classification of the message.
    pub kind: MessageKind,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: DateTime<Utc>,
        author: impl Into<String>,
        body: impl Into<String>,
        kind: MessageKind,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
            kind,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns `true` for [`MessageKind::Text`] messages.
    pub fn is_text(&self) -> bool {
        self.kind == MessageKind::Text
    }

    /// Bytes this message contributes to its author's text volume.
    ///
    /// Only text bodies count; media placeholders and subjects are zero.
    pub fn text_bytes(&self) -> usize {
        if self.is_text() { self.body.len() } else { 0 }
    }
}
