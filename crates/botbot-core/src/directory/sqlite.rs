//! SQLite-backed directory.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::DirectoryStore;
use crate::error::{BotBotError, BotBotResult};
use crate::types::{AddOutcome, Referent};

/// SQLite directory store.
///
/// Two tables: `bot (id, name UNIQUE, pronoun)` and
/// `topic (bot_id, topic, UNIQUE(bot_id, topic))`.
pub struct SqliteDirectory {
    conn: Mutex<Connection>,
}

impl SqliteDirectory {
    /// Open (or create) a directory at the given path.
    pub fn new(db_path: impl AsRef<Path>) -> BotBotResult<Self> {
        let db_path = db_path.as_ref();
        if db_path.to_str() == Some(":memory:") {
            return Self::in_memory();
        }

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| BotBotError::connection(format!("{}: {}", db_path.display(), e)))?;
        debug!(path = %db_path.display(), "Opened directory database");
        Self::from_connection(conn)
    }

    /// Create an in-memory directory (for testing).
    pub fn in_memory() -> BotBotResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| BotBotError::connection(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> BotBotResult<Self> {
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> BotBotResult<()> {
        let conn = self.conn()?;
        conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS bot (
                id      INTEGER PRIMARY KEY,
                name    TEXT NOT NULL UNIQUE,
                pronoun TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS topic (
                bot_id INTEGER NOT NULL REFERENCES bot(id) ON DELETE CASCADE,
                topic  TEXT NOT NULL,
                UNIQUE(bot_id, topic)
            );

            CREATE INDEX IF NOT EXISTS idx_topic_topic ON topic(topic);
        "#,
        )?;
        Ok(())
    }

    fn conn(&self) -> BotBotResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| BotBotError::lock_poisoned())
    }

    fn row_to_referent(row: &rusqlite::Row<'_>) -> rusqlite::Result<Referent> {
        Ok(Referent::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    }
}

impl DirectoryStore for SqliteDirectory {
    fn add_referent(&self, referent: &Referent) -> BotBotResult<AddOutcome> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        let inserted = tx.execute(
            "INSERT INTO bot (name, pronoun) VALUES (?1, ?2) ON CONFLICT(name) DO NOTHING",
            params![referent.name, referent.pronoun],
        )?;
        let bot_id: i64 = tx.query_row(
            "SELECT id FROM bot WHERE name = ?1",
            params![referent.name],
            |row| row.get(0),
        )?;

        let mut new_topics = Vec::new();
        for topic in &referent.topics {
            let added = tx.execute(
                "INSERT OR IGNORE INTO topic (bot_id, topic) VALUES (?1, ?2)",
                params![bot_id, topic],
            )?;
            if added > 0 {
                new_topics.push(topic.clone());
            }
        }

        tx.commit()?;

        let outcome = AddOutcome {
            is_new: inserted > 0,
            new_topics,
        };
        debug!(
            name = %referent.name,
            is_new = outcome.is_new,
            new_topics = ?outcome.new_topics,
            "Stored referent"
        );
        Ok(outcome)
    }

    fn all_referents(&self) -> BotBotResult<Vec<Referent>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT name, pronoun FROM bot ORDER BY id ASC")?;
        let referents = stmt
            .query_map([], Self::row_to_referent)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(referents)
    }

    fn find_by_topic(&self, topic: &str) -> BotBotResult<Option<Referent>> {
        let conn = self.conn()?;
        let found = conn
            .query_row(
                r#"SELECT bot.name, bot.pronoun
                   FROM bot JOIN topic ON bot.id = topic.bot_id
                   WHERE topic.topic = ?1
                   ORDER BY bot.id ASC
                   LIMIT 1"#,
                params![topic],
                Self::row_to_referent,
            )
            .optional()?;
        Ok(found.map(|referent| referent.with_topics([topic])))
    }

    fn find_by_name(&self, name: &str) -> BotBotResult<Option<Referent>> {
        let conn = self.conn()?;
        let found = conn
            .query_row(
                "SELECT name, pronoun FROM bot WHERE name = ?1",
                params![name],
                Self::row_to_referent,
            )
            .optional()?;
        Ok(found)
    }

    fn delete_referent(&self, name: &str) -> BotBotResult<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        // Topics first: databases created without the cascade still end up clean.
        tx.execute(
            "DELETE FROM topic WHERE bot_id IN (SELECT id FROM bot WHERE name = ?1)",
            params![name],
        )?;
        let deleted = tx.execute("DELETE FROM bot WHERE name = ?1", params![name])?;
        tx.commit()?;

        debug!(name = %name, deleted, "Deleted referent");
        Ok(())
    }
}
