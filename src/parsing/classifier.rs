//! Line classification for WhatsApp plaintext exports.
//!
//! Message bodies may contain literal newlines, so line breaks alone do not
//! separate messages. Every physical line is re-examined for header shape:
//!
//! - `15/01/2024, 10:30 - Alice: Hello` (message header)
//! - `15/01/2024, 10:30 - Alice changed the subject from "A" to "B"` (header)
//! - `15/01/2024, 10:30 - Alice created group "Family"` (system notice)
//! - anything else (continuation of the open message)
//!
//! This is a heuristic. A body line that happens to look like
//! `date, time - name: text` is read as a new message.

use regex::Regex;

use crate::config::ExportConfig;
use crate::error::{Result, StatsError};

/// Strips a trailing `\n` or `\r\n`.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Prepares a raw line for matching: no terminator, no leading BOM.
fn match_view(line: &str) -> &str {
    strip_terminator(line).trim_start_matches('\u{feff}')
}

/// Fields captured from a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFields<'a> {
    /// Raw `<date>, <time>` text
    pub timestamp: &'a str,
    /// Author display name
    pub author: &'a str,
    /// Text after `Author: `, absent for subject changes
    pub text: Option<&'a str>,
    /// New subject, present only for subject changes
    pub new_subject: Option<&'a str>,
}

/// Result of matching a line against the header pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMatch<'a> {
    Header(HeaderFields<'a>),
    NotHeader,
}

impl<'a> HeaderMatch<'a> {
    pub fn is_header(&self) -> bool {
        matches!(self, HeaderMatch::Header(_))
    }

    /// Returns the captured fields, if this is a header.
    pub fn fields(self) -> Option<HeaderFields<'a>> {
        match self {
            HeaderMatch::Header(fields) => Some(fields),
            HeaderMatch::NotHeader => None,
        }
    }
}

/// Matcher for message header lines.
///
/// Captures four named groups: `timestamp`, `author`, `text` and `subject`.
#[derive(Debug, Clone)]
pub struct HeaderMatcher {
    regex: Regex,
}

impl HeaderMatcher {
    pub fn new(config: &ExportConfig) -> Result<Self> {
        let pattern = format!(
            r#"^(?P<timestamp>{prefix}) - (?P<author>[^:]+?)(?:: (?P<text>.*)| changed the subject from ".*" to "(?P<subject>.*)")$"#,
            prefix = config.header_prefix,
        );
        let regex = Regex::new(&pattern).map_err(|e| StatsError::invalid_pattern(pattern, e))?;
        Ok(Self { regex })
    }

    /// Matches a single physical line. The line terminator is ignored.
    pub fn match_line<'a>(&self, line: &'a str) -> HeaderMatch<'a> {
        let Some(caps) = self.regex.captures(match_view(line)) else {
            return HeaderMatch::NotHeader;
        };

        // Both groups are mandatory in the pattern
        let (Some(timestamp), Some(author)) = (caps.name("timestamp"), caps.name("author")) else {
            return HeaderMatch::NotHeader;
        };

        HeaderMatch::Header(HeaderFields {
            timestamp: timestamp.as_str(),
            author: author.as_str(),
            text: caps.name("text").map(|m| m.as_str()),
            new_subject: caps.name("subject").map(|m| m.as_str()),
        })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(match_view(line))
    }
}

/// Matcher for system notices generated by the export tool.
#[derive(Debug, Clone)]
pub struct NoticeMatcher {
    /// `None` when no notice patterns are configured
    regex: Option<Regex>,
}

impl NoticeMatcher {
    pub fn new(config: &ExportConfig) -> Result<Self> {
        if config.notice_patterns.is_empty() {
            return Ok(Self { regex: None });
        }

        // Validate each body on its own so errors name the offending pattern
        for body in &config.notice_patterns {
            Regex::new(body).map_err(|e| StatsError::invalid_pattern(body.clone(), e))?;
        }

        let alternatives = config
            .notice_patterns
            .iter()
            .map(|body| format!("(?:{body})"))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            "^(?:{prefix}) - (?:{alternatives})$",
            prefix = config.header_prefix
        );
        let regex = Regex::new(&pattern).map_err(|e| StatsError::invalid_pattern(pattern, e))?;

        Ok(Self { regex: Some(regex) })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(match_view(line)))
    }
}

/// Classification of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// System notice, dropped entirely
    Notice,
    /// First line of a new logical message
    Header(HeaderFields<'a>),
    /// Belongs to the currently open message
    Continuation,
}

/// Decides message boundaries line by line.
///
/// Built once from an [`ExportConfig`]; all patterns are compiled up front.
///
/// # Example
///
/// ```rust
/// use wastats::config::ExportConfig;
/// use wastats::parsing::LineClassifier;
///
/// let classifier = LineClassifier::new(&ExportConfig::default())?;
///
/// assert!(classifier.starts_new_message("1/1/20, 09:00 - Alice: Hello"));
/// assert!(classifier.is_special("1/1/20, 09:00 - Alice created group \"Family\""));
/// assert!(!classifier.starts_new_message("just more text"));
/// # Ok::<(), wastats::StatsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LineClassifier {
    header: HeaderMatcher,
    notices: NoticeMatcher,
}

impl LineClassifier {
    pub fn new(config: &ExportConfig) -> Result<Self> {
        Ok(Self {
            header: HeaderMatcher::new(config)?,
            notices: NoticeMatcher::new(config)?,
        })
    }

    /// Returns `true` if the line is a system notice to be dropped.
    pub fn is_special(&self, line: &str) -> bool {
        self.notices.is_match(line)
    }

    /// Returns `true` if the line has message header shape.
    pub fn starts_new_message(&self, line: &str) -> bool {
        self.header.is_match(line)
    }

    pub fn match_header<'a>(&self, line: &'a str) -> HeaderMatch<'a> {
        self.header.match_line(line)
    }

    /// Classifies a line. Notices win over headers.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if self.is_special(line) {
            return LineClass::Notice;
        }
        match self.header.match_line(line) {
            HeaderMatch::Header(fields) => LineClass::Header(fields),
            HeaderMatch::NotHeader => LineClass::Continuation,
        }
    }

    pub fn header_matcher(&self) -> &HeaderMatcher {
        &self.header
    }
}
