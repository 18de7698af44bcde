//! Structural patterns for introductions and forget requests.
//!
//! Each pattern is a small anchored regex applied to what is left of the
//! message after the previous one matched, so every way an introduction can
//! fail has its own [`IntroductionMiss`].
//!
//! `.` never crosses a line break, so the keyword, the `to @` target and the
//! mention have to share a line.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::text::stemmed_words;
use crate::types::{Referent, FIRST_PERSON};

/// `@**any name**` or `@word`, anchored at the `@`.
static MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(?:\*\*(.+?)\*\*|(\w+))").unwrap());

static FORGET_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)forget").unwrap());

static INTRODUCE_KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)introduce").unwrap());

/// The `to @` that precedes the introduced mention.
static TARGET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)to @").unwrap());

/// `, she ` / `. they ` right after the mention.
static CLAUSE_PRONOUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[,.] (\w+) ").unwrap());

/// Everything after `about ` up to the next period or the end of the text.
/// A single trailing newline still counts as the end.
static ABOUT_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^.*?about (.+?)(?:\.|\n?$)").unwrap());

/// The bot's own `@**name**` (or silent `@_**name**`) at the start of a message.
static LEADING_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*@_?\*\*(.+?)\*\*\s*").unwrap());

/// Stage at which an introduction stopped matching.
///
/// Variants are ordered by how far the parser got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Error)]
pub enum IntroductionMiss {
    #[error("no 'introduce' keyword")]
    MissingKeyword,
    #[error("no 'to @mention' after 'introduce'")]
    MissingMention,
    #[error("no ', pronoun' clause after the mention")]
    MissingPronoun,
    #[error("no 'about ...' clause")]
    MissingTopics,
}

/// A mention matched at the start of `text`.
struct Mention<'a> {
    name: &'a str,
    len: usize,
}

fn mention_at(text: &str) -> Option<Mention<'_>> {
    let caps = MENTION.captures(text)?;
    let name = caps.get(1).or_else(|| caps.get(2))?.as_str();
    Some(Mention {
        name,
        len: caps.get(0)?.end(),
    })
}

/// Drop the mention a stream message opens with when it addresses the bot.
///
/// With `bot_name` only that exact mention is removed; without it any leading
/// starred mention is. Other content is returned unchanged.
pub fn strip_leading_mention<'a>(content: &'a str, bot_name: Option<&str>) -> &'a str {
    let Some(caps) = LEADING_MENTION.captures(content) else {
        return content;
    };
    if bot_name.is_some_and(|name| group(&caps, 1) != name) {
        return content;
    }
    &content[caps.get(0).map_or(0, |m| m.end())..]
}

fn same_line(text: &str) -> bool {
    !text.contains('\n')
}

/// Extract the name from a forget request.
///
/// After a `forget` keyword there must be at least one character, then a
/// mention on the same line. When several mentions follow, the last one wins.
pub fn forget_target(content: &str) -> Option<String> {
    FORGET_KEYWORD.find_iter(content).find_map(|keyword| {
        let rest = &content[keyword.end()..];
        let line = rest.split('\n').next().unwrap_or_default();
        line.match_indices('@')
            .rev()
            .filter(|(at, _)| *at > 0)
            .find_map(|(at, _)| mention_at(&line[at..]))
            .map(|mention| mention.name.to_string())
    })
}

/// Normalize a captured pronoun: "you" means the assistant itself.
pub fn normalize_pronoun(raw: &str) -> String {
    if raw == "you" {
        FIRST_PERSON.to_string()
    } else {
        raw.to_lowercase()
    }
}

/// Parse "introduce ... to @mention, pronoun ... about topics".
///
/// Every `introduce` keyword and every `to @` target after it is tried in
/// order; the first complete match wins. On failure the miss of the attempt
/// that got furthest is returned.
pub fn parse_introduction(content: &str) -> Result<Referent, IntroductionMiss> {
    let mut deepest = IntroductionMiss::MissingKeyword;

    for keyword in INTRODUCE_KEYWORD.find_iter(content) {
        let rest = &content[keyword.end()..];
        match introduction_after_keyword(rest) {
            Ok(referent) => return Ok(referent),
            Err(miss) => deepest = deepest.max(miss),
        }
    }

    Err(deepest)
}

fn introduction_after_keyword(rest: &str) -> Result<Referent, IntroductionMiss> {
    let mut deepest = IntroductionMiss::MissingMention;

    for target in TARGET.find_iter(rest) {
        if target.start() == 0 || !same_line(&rest[..target.start()]) {
            continue;
        }
        // The `@` is the last byte of the target match.
        let Some(mention) = mention_at(&rest[target.end() - 1..]) else {
            continue;
        };
        let after_mention = &rest[target.end() - 1 + mention.len..];

        match clause_after_mention(after_mention) {
            Ok((pronoun, topics)) => {
                return Ok(Referent::new(mention.name, pronoun).with_topics(topics));
            }
            Err(miss) => deepest = deepest.max(miss),
        }
    }

    Err(deepest)
}

fn clause_after_mention(text: &str) -> Result<(String, Vec<String>), IntroductionMiss> {
    let clause = CLAUSE_PRONOUN
        .captures(text)
        .ok_or(IntroductionMiss::MissingPronoun)?;
    let pronoun = normalize_pronoun(group(&clause, 1));
    let after_pronoun = &text[clause.get(0).map_or(0, |m| m.end())..];

    let about = ABOUT_CLAUSE
        .captures(after_pronoun)
        .ok_or(IntroductionMiss::MissingTopics)?;

    Ok((pronoun, stemmed_words(group(&about, 1))))
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}
