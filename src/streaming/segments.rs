//! Line-by-line segmentation of a transcript into chunks and notices.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::Result;
use crate::parsing::LineClassifier;

/// Raw text of one logical message, terminators included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
    /// 1-based line number of the chunk's first line
    pub start_line: usize,
    /// Header line plus continuation lines, verbatim
    pub text: String,
}

/// One unit of segmented input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A system notice line that was dropped
    Notice {
        /// 1-based line number
        line: usize,
        /// The line, verbatim
        text: String,
    },
    /// A completed logical message
    Chunk(RawChunk),
}

impl Segment {
    /// Raw text of this segment.
    pub fn text(&self) -> &str {
        match self {
            Segment::Notice { text, .. } => text,
            Segment::Chunk(chunk) => &chunk.text,
        }
    }

    pub fn is_notice(&self) -> bool {
        matches!(self, Segment::Notice { .. })
    }
}

/// Chunk being accumulated until the next header shows up.
#[derive(Debug, Default)]
struct PendingChunk {
    start_line: usize,
    text: String,
}

impl PendingChunk {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push_line(&mut self, line_no: usize, line: &str) {
        if self.text.is_empty() {
            self.start_line = line_no;
        }
        self.text.push_str(line);
    }

    fn take(&mut self) -> RawChunk {
        let pending = std::mem::take(self);
        RawChunk {
            start_line: pending.start_line,
            text: pending.text,
        }
    }
}

/// Iterator over the [`Segment`]s of a transcript.
///
/// Notices are yielded as soon as they are read and never touch the open
/// chunk. A chunk is yielded when the next header arrives, or at end of
/// input. Lines before the first header form a chunk of their own; the
/// message parser rejects it.
pub struct SegmentIterator<'a, R: BufRead> {
    reader: R,
    classifier: &'a LineClassifier,
    line_buffer: String,
    line_no: usize,
    bytes_read: u64,
    pending: PendingChunk,
    finished: bool,
}

impl<'a, R: BufRead> SegmentIterator<'a, R> {
    pub fn new(reader: R, classifier: &'a LineClassifier) -> Self {
        Self {
            reader,
            classifier,
            line_buffer: String::with_capacity(4096),
            line_no: 0,
            bytes_read: 0,
            pending: PendingChunk::default(),
            finished: false,
        }
    }

    /// Number of bytes consumed from the reader so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Number of physical lines read so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    fn read_line(&mut self) -> std::io::Result<bool> {
        self.line_buffer.clear();
        let bytes = self.reader.read_line(&mut self.line_buffer)?;
        if bytes == 0 {
            return Ok(false);
        }
        self.bytes_read += bytes as u64;
        self.line_no += 1;
        Ok(true)
    }

    fn flush(&mut self) -> Option<Segment> {
        if self.pending.is_empty() {
            return None;
        }
        let chunk = self.pending.take();
        trace!(line = chunk.start_line, bytes = chunk.text.len(), "chunk complete");
        Some(Segment::Chunk(chunk))
    }
}

impl<R: BufRead> Iterator for SegmentIterator<'_, R> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.read_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.finished = true;
                    return self.flush().map(Ok);
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }

            let line_no = self.line_no;
            if self.classifier.is_special(&self.line_buffer) {
                debug!(line = line_no, "dropping system notice");
                return Some(Ok(Segment::Notice {
                    line: line_no,
                    text: self.line_buffer.clone(),
                }));
            }

            let completed = if self.classifier.starts_new_message(&self.line_buffer) {
                self.flush()
            } else {
                None
            };
            self.pending.push_line(line_no, &self.line_buffer);
            if let Some(segment) = completed {
                return Some(Ok(segment));
            }
        }
    }
}
