//! Transcript parser: the single entry point for turning an export into
//! messages or statistics.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wastats::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//!
//! // Parse entire file into memory
//! let messages = parser.parse_file(Path::new("WhatsApp Chat.txt"))?;
//!
//! // Or aggregate straight from the file without keeping messages
//! let stats = parser.stats_from_file(Path::new("WhatsApp Chat.txt"))?;
//! println!("{} authors", stats.len());
//! # Ok::<(), wastats::StatsError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::Message;
use crate::config::ExportConfig;
use crate::core::ChatStats;
use crate::error::Result;
use crate::parsing::{LineClassifier, MessageParser};
use crate::streaming::{MessageIterator, SegmentIterator};

/// Parser for WhatsApp plaintext exports.
///
/// Holds the compiled patterns; build it once and reuse it.
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    config: ExportConfig,
    classifier: LineClassifier,
    messages: MessageParser,
}

impl TranscriptParser {
    /// Creates a parser for the default Android export format.
    pub fn new() -> Self {
        Self::with_config(ExportConfig::default())
            .expect("default export patterns are valid regexes")
    }

    /// Creates a parser with custom configuration.
    ///
    /// Fails if a configured pattern does not compile.
    pub fn with_config(config: ExportConfig) -> Result<Self> {
        let classifier = LineClassifier::new(&config)?;
        let messages = MessageParser::with_matcher(classifier.header_matcher().clone(), &config);
        Ok(Self {
            config,
            classifier,
            messages,
        })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    pub fn message_parser(&self) -> &MessageParser {
        &self.messages
    }

    /// Splits input into notices and raw chunks without parsing them.
    pub fn segments<R: BufRead>(&self, reader: R) -> SegmentIterator<'_, R> {
        SegmentIterator::new(reader, &self.classifier)
    }

    /// Lazily parses messages from a reader.
    pub fn stream<R: BufRead>(&self, reader: R) -> MessageIterator<'_, R> {
        MessageIterator::new(self.segments(reader), &self.messages)
    }

    /// Parses every message from a reader.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Message>> {
        let messages = self.stream(reader).collect::<Result<Vec<_>>>()?;
        info!(messages = messages.len(), "transcript parsed");
        Ok(messages)
    }

    /// Parses every message from an in-memory transcript.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        self.parse_reader(content.as_bytes())
    }

    /// Parses every message from a file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Message>> {
        self.parse_reader(self.open(path)?)
    }

    /// Aggregates statistics from a reader without keeping the messages.
    pub fn stats_from_reader<R: BufRead>(&self, reader: R) -> Result<ChatStats> {
        let mut stream = self.stream(reader);
        let stats = ChatStats::try_from_results(stream.by_ref())?;
        info!(
            messages = stats.total_messages(),
            authors = stats.len(),
            lines = stream.lines_read(),
            bytes = stream.bytes_processed(),
            "transcript aggregated"
        );
        Ok(stats)
    }

    /// Aggregates statistics from a file.
    pub fn stats_from_file(&self, path: &Path) -> Result<ChatStats> {
        self.stats_from_reader(self.open(path)?)
    }

    fn open(&self, path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path)?;
        Ok(BufReader::with_capacity(self.config.buffer_size, file))
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}
