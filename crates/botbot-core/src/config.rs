//! Configuration for botbot.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::compose::PhraseBook;
use crate::error::{BotBotError, BotBotResult};

/// Default marker found in the sender address of bot accounts.
pub const DEFAULT_BOT_SENDER_MARKER: &str = "-bot@";

/// Main botbot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotBotConfig {
    /// Path to the directory database. `:memory:` keeps it in memory.
    pub db_path: PathBuf,
    /// Messages whose sender address contains this are ignored.
    pub bot_sender_marker: String,
    /// Phrases used for randomized replies.
    pub phrases: PhraseBook,
}

impl Default for BotBotConfig {
    fn default() -> Self {
        let botbot_dir = dirs::home_dir()
            .map(|h| h.join(".botbot"))
            .unwrap_or_else(|| PathBuf::from(".botbot"));

        Self {
            db_path: botbot_dir.join("botbot.db"),
            bot_sender_marker: DEFAULT_BOT_SENDER_MARKER.to_string(),
            phrases: PhraseBook::default(),
        }
    }
}

impl BotBotConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> BotBotResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| BotBotError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| BotBotError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| BotBotError::Configuration(e.to_string())),
            _ => Err(BotBotError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `BOTBOT_DB_PATH` and `BOTBOT_BOT_MARKER` on top of this config.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("BOTBOT_DB_PATH") {
            self.db_path = PathBuf::from(path);
        }
        if let Ok(marker) = std::env::var("BOTBOT_BOT_MARKER") {
            self.bot_sender_marker = marker;
        }
        self
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> BotBotConfigBuilder {
        BotBotConfigBuilder::default()
    }
}

/// Builder for BotBotConfig.
#[derive(Default)]
pub struct BotBotConfigBuilder {
    config: BotBotConfig,
}

impl BotBotConfigBuilder {
    /// Set the directory database path.
    pub fn db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.db_path = path.into();
        self
    }

    /// Keep the directory in memory only.
    pub fn in_memory(self) -> Self {
        self.db_path(":memory:")
    }

    /// Set the bot sender marker.
    pub fn bot_sender_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.bot_sender_marker = marker.into();
        self
    }

    /// Set the phrase book.
    pub fn phrases(mut self, phrases: PhraseBook) -> Self {
        self.config.phrases = phrases;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> BotBotConfig {
        self.config
    }
}
