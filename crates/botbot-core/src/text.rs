//! Tokenizing and suffix-stripping stemmer.
//!
//! The same `stem` is used for keyword intents, for the topics of an
//! introduction and for topic queries, so "pearing" and "pear" meet in the
//! directory as `pear`.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Suffixes removed by [`stem`], longest first.
const SUFFIXES: &[&str] = &["ings", "ing", "ion", "s"];

/// Common English function words ignored when looking for keywords.
pub const STOP_WORDS: &[&str] = &[
    "the", "at", "there", "some", "my", "of", "be", "use", "her", "than", "and", "this", "an",
    "would", "first", "a", "have", "each", "make", "water", "to", "from", "which", "like", "been",
    "in", "or", "she", "him", "call", "is", "one", "do", "into", "who", "you", "had", "time",
    "oil", "that", "by", "their", "has", "its", "it", "word", "if", "look", "now", "he", "but",
    "will", "two", "find", "was", "not", "up", "more", "long", "for", "what", "other", "write",
    "down", "on", "all", "about", "go", "day", "are", "were", "out", "see", "did", "as", "we",
    "many", "number", "get", "with", "when", "then", "no", "come", "his", "your", "them", "way",
    "made", "they", "can", "these", "could", "may", "said", "so", "people", "part", "rc",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Whether a lowercased word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Strip at most one trailing suffix from `word`.
pub fn stem(word: &str) -> &str {
    SUFFIXES
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .unwrap_or(word)
}

/// Split `text` into lowercased, stop-word-free, stemmed tokens.
///
/// Input order is preserved and duplicates are kept. Pieces that stem to
/// nothing (a bare "s" or "ing") are dropped.
pub fn stemmed_words(text: &str) -> Vec<String> {
    NON_WORD
        .split(text)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .filter(|word| !is_stop_word(word))
        .filter_map(|word| {
            let stemmed = stem(&word);
            (!stemmed.is_empty()).then(|| stemmed.to_string())
        })
        .collect()
}
