//! Core data types.

use serde::{Deserialize, Serialize};

/// Pronoun stored for the referent that is the assistant itself.
pub const FIRST_PERSON: &str = "I";

/// A named referent ("bot") known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referent {
    /// Unique, case-sensitive name as typed in the mention.
    pub name: String,
    /// Normalized pronoun; [`FIRST_PERSON`] for the assistant.
    pub pronoun: String,
    /// Stemmed topic keywords.
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Referent {
    /// Create a new referent.
    pub fn new(name: impl Into<String>, pronoun: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pronoun: pronoun.into(),
            topics: Vec::new(),
        }
    }

    /// Set the topics.
    pub fn with_topics<I, T>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this referent is the assistant itself.
    pub fn is_first_person(&self) -> bool {
        self.pronoun == FIRST_PERSON
    }
}

/// An inbound chat message, as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub content: String,
    pub sender_email: String,
}

impl InboundMessage {
    pub fn new(content: impl Into<String>, sender_email: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender_email: sender_email.into(),
        }
    }
}

/// Result of adding a referent to the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// The name was not known before.
    pub is_new: bool,
    /// Topics that were not yet associated with the referent, in input order.
    pub new_topics: Vec<String>,
}
