//! Plain-text report, one line per author.
//!
//! ```text
//! Alice wrote 4 messages (text: 2, media: 1, subject_change: 1) whose text had a total of 17 bytes.
//! ```

use std::fmt;
use std::io::{self, Write};

use super::stats::{AuthorStats, ChatStats};

impl fmt::Display for AuthorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wrote {} messages (", self.author, self.total())?;
        for (i, (kind, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{kind}: {count}")?;
        }
        write!(
            f,
            ") whose text had a total of {} bytes.",
            self.text_bytes
        )
    }
}

/// Writes the report in ranked order.
pub fn write_report<W: Write>(stats: &ChatStats, mut out: W) -> io::Result<()> {
    for author in stats.ranked() {
        writeln!(out, "{author}")?;
    }
    out.flush()
}

/// Renders the report into a string.
pub fn render_report(stats: &ChatStats) -> String {
    let mut output = String::new();
    for author in stats.ranked() {
        output.push_str(&author.to_string());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::core::aggregate;
    use crate::message::{Message, MessageKind};

    fn msg(author: &str, body: &str, kind: MessageKind) -> Message {
        let ts = Utc.with_ymd_and_hms(2020, 1, 1, 9, 0, 0).unwrap();
        Message::new(ts, author, body, kind)
    }

    #[test]
    fn test_author_line() {
        let mut alice = AuthorStats::new("Alice");
        alice.record(&msg("Alice", "Hello", MessageKind::Text));
        alice.record(&msg("Alice", "<Media omitted>", MessageKind::Media));

        assert_eq!(
            alice.to_string(),
            "Alice wrote 2 messages (text: 1, media: 1, subject_change: 0) whose text had a total of 5 bytes."
        );
    }

    #[test]
    fn test_report_order() {
        let messages = vec![
            msg("Alice", "a", MessageKind::Text),
            msg("Bob", "bb", MessageKind::Text),
            msg("Bob", "B", MessageKind::SubjectChange),
        ];
        let report = render_report(&aggregate(&messages));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Bob wrote 2 messages"));
        assert!(lines[0].ends_with("a total of 2 bytes."));
        assert!(lines[1].starts_with("Alice wrote 1 messages"));
    }

    #[test]
    fn test_write_report_matches_render() {
        let messages = vec![
            msg("Alice", "a", MessageKind::Text),
            msg("Bob", "bb", MessageKind::Text),
        ];
        let stats = aggregate(&messages);

        let mut buffer = Vec::new();
        write_report(&stats, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), render_report(&stats));
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render_report(&ChatStats::new()), "");
    }
}
