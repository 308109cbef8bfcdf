//! Streaming iterator over parsed messages.

use std::io::BufRead;

use crate::Message;
use crate::error::Result;
use crate::parsing::MessageParser;

use super::segments::{Segment, SegmentIterator};

/// Iterator over the messages of a transcript.
///
/// Notices are skipped. The first error ends the iteration: after an
/// `Err` item, `next` returns `None`.
pub struct MessageIterator<'a, R: BufRead> {
    segments: SegmentIterator<'a, R>,
    parser: &'a MessageParser,
    failed: bool,
}

impl<'a, R: BufRead> MessageIterator<'a, R> {
    pub fn new(segments: SegmentIterator<'a, R>, parser: &'a MessageParser) -> Self {
        Self {
            segments,
            parser,
            failed: false,
        }
    }

    /// Number of bytes consumed from the reader so far.
    pub fn bytes_processed(&self) -> u64 {
        self.segments.bytes_processed()
    }

    /// Number of physical lines read so far.
    pub fn lines_read(&self) -> usize {
        self.segments.lines_read()
    }
}

impl<R: BufRead> Iterator for MessageIterator<'_, R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let result = match self.segments.next()? {
                Ok(Segment::Notice { .. }) => continue,
                Ok(Segment::Chunk(chunk)) => self.parser.parse_at(&chunk.text, chunk.start_line),
                Err(e) => Err(e),
            };
            if result.is_err() {
                self.failed = true;
            }
            return Some(result);
        }
    }
}
