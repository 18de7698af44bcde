//! Pronoun grammar and list joining.

use crate::types::FIRST_PERSON;

/// Accusative case of a nominative pronoun. Unknown pronouns pass through.
pub fn accusative(nominative: &str) -> &str {
    match nominative {
        FIRST_PERSON => "me",
        "he" => "him",
        "she" => "her",
        "they" => "them",
        "ze" => "zir",
        other => other,
    }
}

/// Present tense of "to be" for a pronoun.
pub fn to_be(pronoun: &str) -> &'static str {
    match pronoun {
        FIRST_PERSON => "am",
        "you" | "we" | "they" => "are",
        _ => "is",
    }
}

/// Uppercase the first character.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Chat mention markup for a referent name.
pub fn mention(name: &str) -> String {
    format!("@**{}**", name)
}

/// Join items as "A", "A and B", "A, B and C".
pub fn comma_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}
