//! Intent parsing.
//!
//! Keyword intents look at the first stemmed token; the rest are decided by
//! structural patterns on the raw text. Checks run in this order and the
//! first match wins:
//!
//! 1. `thank...` -> [`Intent::Thanks`]
//! 2. `help...` -> [`Intent::Help`]
//! 3. `forget...` -> [`Intent::Forget`]
//! 4. text starting with "who do you know" -> [`Intent::ListKnown`]
//! 5. any token `introduce` -> [`Intent::Introduce`]
//! 6. anything else -> [`Intent::TopicQuery`]

mod patterns;

pub use patterns::{
    forget_target, normalize_pronoun, parse_introduction, strip_leading_mention, IntroductionMiss,
};

use crate::text::stemmed_words;
use crate::types::Referent;

const LIST_KNOWN_PREFIX: &str = "who do you know";

/// A parsed chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Thanks,
    Help,
    /// Forget the named referent; `None` when no mention could be found.
    Forget(Option<String>),
    ListKnown,
    /// An introduction, or the reason it could not be understood.
    Introduce(Result<Referent, IntroductionMiss>),
    /// Look up the stemmed tokens as topics, in order. May be empty.
    TopicQuery(Vec<String>),
}

/// Parse a message into an [`Intent`]. Never fails.
pub fn parse(content: &str) -> Intent {
    let words = stemmed_words(content);

    match words.first().map(String::as_str) {
        Some("thank") => return Intent::Thanks,
        Some("help") => return Intent::Help,
        Some("forget") => return Intent::Forget(forget_target(content)),
        _ => {}
    }

    if content.to_lowercase().starts_with(LIST_KNOWN_PREFIX) {
        return Intent::ListKnown;
    }

    if words.iter().any(|word| word == "introduce") {
        return Intent::Introduce(parse_introduction(content));
    }

    Intent::TopicQuery(words)
}
