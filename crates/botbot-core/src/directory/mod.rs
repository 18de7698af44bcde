//! Directory of known referents and their topics.

mod sqlite;

pub use sqlite::SqliteDirectory;

use crate::error::BotBotResult;
use crate::types::{AddOutcome, Referent};

/// Storage for referents and the topics they know about.
///
/// Implementations must make `add_referent` atomic: the name lookup, the
/// insert and the topic inserts happen as one unit.
pub trait DirectoryStore: Send + Sync {
    /// Insert the referent or reuse the existing one with the same name, then
    /// add every topic not yet associated with it. The stored pronoun of an
    /// existing referent is left untouched.
    fn add_referent(&self, referent: &Referent) -> BotBotResult<AddOutcome>;

    /// All referents in creation order, without topics.
    fn all_referents(&self) -> BotBotResult<Vec<Referent>>;

    /// The earliest-created referent that knows about `topic`.
    ///
    /// `topic` must already be stemmed. The returned referent carries only
    /// the matched topic.
    fn find_by_topic(&self, topic: &str) -> BotBotResult<Option<Referent>>;

    /// Look up a referent by exact name, without topics.
    fn find_by_name(&self, name: &str) -> BotBotResult<Option<Referent>>;

    /// Delete a referent and all of its topics. Unknown names are ignored.
    fn delete_referent(&self, name: &str) -> BotBotResult<()>;
}
