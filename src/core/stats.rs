//! Per-author aggregation.

use std::collections::HashMap;
use std::ops::Index;

use serde::Serialize;

use crate::error::Result;
use crate::message::{Message, MessageKind};

/// Message counts keyed by [`MessageKind`], all starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts([usize; MessageKind::COUNT]);

impl KindCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, kind: MessageKind) {
        self.0[kind.index()] += 1;
    }

    pub fn get(&self, kind: MessageKind) -> usize {
        self.0[kind.index()]
    }

    /// Sum over all kinds.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Iterates `(kind, count)` in report order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (MessageKind, usize)> + '_ {
        MessageKind::all().iter().map(|&kind| (kind, self.get(kind)))
    }
}

impl Index<MessageKind> for KindCounts {
    type Output = usize;

    fn index(&self, kind: MessageKind) -> &usize {
        &self.0[kind.index()]
    }
}

/// Running statistics for one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorStats {
    pub author: String,
    /// UTF-8 bytes of text bodies; media and subjects are not counted
    pub text_bytes: usize,
    pub counts: KindCounts,
}

impl AuthorStats {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text_bytes: 0,
            counts: KindCounts::new(),
        }
    }

    /// Total number of messages from this author.
    pub fn total(&self) -> usize {
        self.counts.total()
    }

    /// Adds one message. The caller guarantees the author matches.
    pub fn record(&mut self, message: &Message) {
        debug_assert_eq!(message.author, self.author);
        self.counts.increment(message.kind);
        self.text_bytes += message.text_bytes();
    }
}

/// Statistics for every author in a transcript, in first-seen order.
///
/// # Example
///
/// ```rust
/// use wastats::core::aggregate;
/// use wastats::parser::TranscriptParser;
/// use wastats::MessageKind;
///
/// let messages = TranscriptParser::new().parse_str(
///     "1/1/20, 09:00 - Alice: Hello\n1/1/20, 09:01 - Bob: <Media omitted>\n",
/// )?;
/// let stats = aggregate(&messages);
///
/// assert_eq!(stats.get("Alice").unwrap().text_bytes, 5);
/// assert_eq!(stats.get("Bob").unwrap().counts[MessageKind::Media], 1);
/// # Ok::<(), wastats::StatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatStats {
    authors: Vec<AuthorStats>,
    index: HashMap<String, usize>,
}

impl ChatStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one message into the statistics.
    pub fn record(&mut self, message: &Message) {
        let slot = match self.index.get(&message.author) {
            Some(&slot) => slot,
            None => {
                let slot = self.authors.len();
                self.authors.push(AuthorStats::new(&message.author));
                self.index.insert(message.author.clone(), slot);
                slot
            }
        };
        self.authors[slot].record(message);
    }

    /// Folds a stream of parse results, stopping at the first error.
    pub fn try_from_results<I>(results: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Message>>,
    {
        let mut stats = Self::new();
        for result in results {
            stats.record(&result?);
        }
        Ok(stats)
    }

    pub fn get(&self, author: &str) -> Option<&AuthorStats> {
        self.index.get(author).map(|&slot| &self.authors[slot])
    }

    /// Number of distinct authors.
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Authors in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &AuthorStats> {
        self.authors.iter()
    }

    /// Number of messages across all authors.
    pub fn total_messages(&self) -> usize {
        self.authors.iter().map(AuthorStats::total).sum()
    }

    /// Authors sorted by descending total. Ties keep first-seen order.
    pub fn ranked(&self) -> Vec<&AuthorStats> {
        let mut ranked: Vec<&AuthorStats> = self.authors.iter().collect();
        ranked.sort_by(|a, b| b.total().cmp(&a.total()));
        ranked
    }
}

impl<'a> Extend<&'a Message> for ChatStats {
    fn extend<I: IntoIterator<Item = &'a Message>>(&mut self, iter: I) {
        for message in iter {
            self.record(message);
        }
    }
}

impl<'a> FromIterator<&'a Message> for ChatStats {
    fn from_iter<I: IntoIterator<Item = &'a Message>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// Groups messages by author and counts them by kind.
pub fn aggregate<'a, I>(messages: I) -> ChatStats
where
    I: IntoIterator<Item = &'a Message>,
{
    messages.into_iter().collect()
}
