//! Line classification and message parsing.
//!
//! - [`classifier`]: decides whether a line is a notice, a header or a
//!   continuation
//! - [`message`]: turns one accumulated chunk into a [`Message`](crate::Message)

pub mod classifier;
pub mod message;

pub use classifier::{
    HeaderFields, HeaderMatch, HeaderMatcher, LineClass, LineClassifier, NoticeMatcher,
    strip_terminator,
};
pub use message::MessageParser;
