//! Reply composition.
//!
//! Replies are plain strings. Anything random goes through the caller's
//! RNG so a seeded generator gives reproducible replies.

pub mod grammar;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::{AddOutcome, Referent};

pub use grammar::{accusative, capitalize, comma_list, mention, to_be};

/// Usage text shown for `help`.
pub const HELP_TEXT: &str = r#"Hi, and thanks for asking!

I'm BotBot, and I'm here to help you find helpful bots. I like to try and figure out what you
mean if you just speak naturally, but really I'm just spotting keywords.

You could say:

"Hey, which bot would be a good example in usage notes?"

or just:

"example"

Ask "Who do you know?" to get a list of bots.
If you know a new bot you could say something like:

"Hi, I absolutely must introduce you to @**Example Bot**, they are all about examples and usage
instructions."

(The syntax is "introduce to <mention name>, <pronoun> about <list of topics>")

Delete a bot with:

"Forget about @**Example Bot**, he doesn't actually exist."

(The syntax is "forget <name>".)
"#;

pub const INTRODUCTION_NOT_UNDERSTOOD: &str = "I love to meet new people, but I don't understand.";
pub const UNFORGETTABLE: &str = "I'm unforgettable.";
pub const FORGET_WHOM: &str = "Who should I forget?";
pub const NEVER_KNEW: &str = "I don't remember if I ever knew them.";
pub const SELF_HELP: &str = "I can help you with that. I know all the best bots.";
pub const NO_MATCH: &str = "Sorry, I don't know how to help you with that.";
pub const NOBODY_KNOWN: &str = "I don't know anyone yet.";
pub const SOMETHING_WENT_WRONG: &str = "Sorry, something went wrong on my end. Please try again.";

const DEFAULT_COMPLIMENT: &str = "great";
const DEFAULT_WELCOME: &str = "You're welcome!";

/// Interchangeable phrases picked at random.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseBook {
    /// Adjectives used to praise a referent.
    pub compliments: Vec<String>,
    /// Answers to a thank-you.
    pub welcomes: Vec<String>,
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self {
            compliments: ["awesome", "very helpful", "amazing", "great", "brilliant"]
                .map(String::from)
                .to_vec(),
            welcomes: ["You're welcome!", "No problem!", "Happy to help!"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl PhraseBook {
    pub fn compliment<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.compliments
            .choose(rng)
            .map_or(DEFAULT_COMPLIMENT, String::as_str)
    }

    pub fn welcome<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.welcomes
            .choose(rng)
            .map_or(DEFAULT_WELCOME, String::as_str)
    }
}

/// What happened to a forget request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgetOutcome {
    /// No mention in the message.
    NoName,
    /// The name is not in the directory.
    Unknown,
    /// The name belongs to the assistant itself; nothing was deleted.
    Unforgettable,
    /// The referent was deleted.
    Forgotten(String),
}

/// Turns resolved intents into reply text.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    phrases: PhraseBook,
}

impl Composer {
    pub fn new(phrases: PhraseBook) -> Self {
        Self { phrases }
    }

    pub fn phrases(&self) -> &PhraseBook {
        &self.phrases
    }

    pub fn thanks<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.phrases.welcome(rng).to_string()
    }

    pub fn help(&self) -> String {
        HELP_TEXT.to_string()
    }

    /// "I know everyone: @**A**, @**B** and @**C**."
    pub fn list_known(&self, referents: &[Referent]) -> String {
        if referents.is_empty() {
            return NOBODY_KNOWN.to_string();
        }
        let mentions: Vec<String> = referents.iter().map(|r| mention(&r.name)).collect();
        format!("I know everyone: {}.", comma_list(&mentions))
    }

    /// Reply to a parsed introduction after it was stored.
    pub fn introduction<R: Rng + ?Sized>(
        &self,
        referent: &Referent,
        outcome: &AddOutcome,
        rng: &mut R,
    ) -> String {
        if outcome.is_new {
            return format!(
                "Thanks! I love meeting new people and can't wait to talk to {}.",
                accusative(&referent.pronoun)
            );
        }
        if !outcome.new_topics.is_empty() {
            return format!(
                "Thank you! I already know {}, but didn't know {} knew about {}.",
                referent.name,
                referent.pronoun,
                outcome.new_topics.join(" ")
            );
        }
        format!(
            "Thank you! I already know {}. They are {}!",
            referent.name,
            self.phrases.compliment(rng)
        )
    }

    pub fn introduction_not_understood(&self) -> String {
        INTRODUCTION_NOT_UNDERSTOOD.to_string()
    }

    pub fn forget(&self, outcome: &ForgetOutcome) -> String {
        match outcome {
            ForgetOutcome::NoName => FORGET_WHOM.to_string(),
            ForgetOutcome::Unknown => NEVER_KNEW.to_string(),
            ForgetOutcome::Unforgettable => UNFORGETTABLE.to_string(),
            ForgetOutcome::Forgotten(name) => format!("I'll never speak of {} again.", name),
        }
    }

    /// Reply to a topic query given the referent that matched, if any.
    pub fn topic_match<R: Rng + ?Sized>(&self, found: Option<&Referent>, rng: &mut R) -> String {
        match found {
            None => NO_MATCH.to_string(),
            Some(referent) if referent.is_first_person() => SELF_HELP.to_string(),
            Some(referent) => format!(
                "My friend {} can help you with that. {} {} {}.",
                mention(&referent.name),
                capitalize(&referent.pronoun),
                to_be(&referent.pronoun),
                self.phrases.compliment(rng)
            ),
        }
    }
}
