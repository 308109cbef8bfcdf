//! Property-based tests for wastats.
//!
//! Transcripts are generated from small message specs, rendered in export
//! format, then parsed back.

use std::io::Cursor;

use proptest::prelude::*;

use wastats::prelude::*;
use wastats::streaming::Segment;

#[derive(Debug, Clone)]
enum Entry {
    Text { author: String, body: String },
    Media { author: String },
    Subject { author: String, subject: String },
    Notice(String),
}

fn arb_author() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Charlie".to_string(),
        "+49 170 1234567".to_string(),
        "Иван".to_string(),
        "Zoë van Dijk".to_string(),
    ])
}

fn arb_body() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "How are you?".to_string(),
        String::new(),
        "time: 10:30".to_string(),
        "Привет мир".to_string(),
        "🎉🔥 emoji".to_string(),
        "first line\nsecond line".to_string(),
        "a\n\nb".to_string(),
        "I added you to my list".to_string(),
    ])
}

fn arb_entry() -> impl Strategy<Value = Entry> {
    prop_oneof![
        4 => (arb_author(), arb_body()).prop_map(|(author, body)| Entry::Text { author, body }),
        1 => arb_author().prop_map(|author| Entry::Media { author }),
        1 => (arb_author(), prop::sample::select(vec!["New", "Family 🏠", ""]))
            .prop_map(|(author, s)| Entry::Subject { author, subject: s.to_string() }),
        1 => prop::sample::select(vec![
            "Alice added Bob".to_string(),
            "Bob created group \"Trip\"".to_string(),
        ])
        .prop_map(Entry::Notice),
    ]
}

fn arb_transcript() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(arb_entry(), 0..30)
}

fn render(entries: &[Entry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let prefix = format!("{}/3/2021, {:02}:{:02} - ", 1 + i % 28, i % 24, i % 60);
        let line = match entry {
            Entry::Text { author, body } => format!("{author}: {body}"),
            Entry::Media { author } => format!("{author}: <Media omitted>"),
            Entry::Subject { author, subject } => {
                format!("{author} changed the subject from \"Old\" to \"{subject}\"")
            }
            Entry::Notice(text) => text.clone(),
        };
        out.push_str(&prefix);
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn expected_messages(entries: &[Entry]) -> Vec<(String, MessageKind)> {
    entries
        .iter()
        .filter_map(|e| match e {
            Entry::Text { author, .. } => Some((author.clone(), MessageKind::Text)),
            Entry::Media { author } => Some((author.clone(), MessageKind::Media)),
            Entry::Subject { author, .. } => Some((author.clone(), MessageKind::SubjectChange)),
            Entry::Notice(_) => None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // SEGMENTATION PROPERTIES
    // ============================================

    /// Every input line ends up in exactly one segment
    #[test]
    fn segments_cover_every_line(entries in arb_transcript()) {
        let input = render(&entries);
        let parser = TranscriptParser::new();
        let segments: Vec<Segment> = parser
            .segments(Cursor::new(input.as_bytes()))
            .collect::<Result<_>>()
            .unwrap();

        let mut rebuilt: Vec<&str> = segments
            .iter()
            .flat_map(|s| s.text().split_inclusive('\n'))
            .collect();
        let mut original: Vec<&str> = input.split_inclusive('\n').collect();
        rebuilt.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(rebuilt, original);
    }

    /// Notices are exactly the generated notice lines
    #[test]
    fn notices_are_dropped(entries in arb_transcript()) {
        let input = render(&entries);
        let parser = TranscriptParser::new();
        let notices = parser
            .segments(Cursor::new(input.as_bytes()))
            .filter(|s| s.as_ref().is_ok_and(Segment::is_notice))
            .count();
        let expected = entries.iter().filter(|e| matches!(e, Entry::Notice(_))).count();
        prop_assert_eq!(notices, expected);
    }

    // ============================================
    // PARSING PROPERTIES
    // ============================================

    /// Authors and kinds come back in order
    #[test]
    fn parse_preserves_authors_and_kinds(entries in arb_transcript()) {
        let messages = TranscriptParser::new().parse_str(&render(&entries)).unwrap();
        let parsed: Vec<(String, MessageKind)> = messages
            .into_iter()
            .map(|m| (m.author, m.kind))
            .collect();
        prop_assert_eq!(parsed, expected_messages(&entries));
    }

    /// Text bodies survive a render and parse
    #[test]
    fn text_body_round_trip(author in arb_author(), body in arb_body()) {
        let input = render(&[Entry::Text { author: author.clone(), body: body.clone() }]);
        let messages = TranscriptParser::new().parse_str(&input).unwrap();
        prop_assert_eq!(messages.len(), 1);
        prop_assert_eq!(&messages[0].author, &author);
        prop_assert_eq!(&messages[0].body, &body);
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Per-kind counts always sum to the author total
    #[test]
    fn counts_sum_to_total(entries in arb_transcript()) {
        let stats = aggregate(&TranscriptParser::new().parse_str(&render(&entries)).unwrap());
        for author in stats.iter() {
            let sum: usize = author.counts.iter().map(|(_, n)| n).sum();
            prop_assert_eq!(sum, author.total());
        }
        prop_assert_eq!(stats.total_messages(), expected_messages(&entries).len());
    }

    /// Text bytes equal the summed length of the author's text bodies
    #[test]
    fn text_bytes_match_bodies(entries in arb_transcript()) {
        let messages = TranscriptParser::new().parse_str(&render(&entries)).unwrap();
        let stats = aggregate(&messages);
        for author in stats.iter() {
            let expected: usize = messages
                .iter()
                .filter(|m| m.author == author.author && m.kind == MessageKind::Text)
                .map(|m| m.body.len())
                .sum();
            prop_assert_eq!(author.text_bytes, expected);
        }
    }

    /// Ranking is non-increasing in total
    #[test]
    fn ranking_is_descending(entries in arb_transcript()) {
        let stats = aggregate(&TranscriptParser::new().parse_str(&render(&entries)).unwrap());
        let ranked = stats.ranked();
        prop_assert_eq!(ranked.len(), stats.len());
        prop_assert!(ranked.windows(2).all(|w| w[0].total() >= w[1].total()));
    }

    /// The report has one line per author
    #[test]
    fn report_has_line_per_author(entries in arb_transcript()) {
        let stats = aggregate(&TranscriptParser::new().parse_str(&render(&entries)).unwrap());
        prop_assert_eq!(render_report(&stats).lines().count(), stats.len());
    }
}
