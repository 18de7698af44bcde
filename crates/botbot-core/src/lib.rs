//! botbot-core - A chat assistant that knows which bot to ask.
//!
//! People introduce bots to BotBot in plain sentences ("introduce you to
//! @**Pairing Bot**, she knows about pairing"), ask it who can help with
//! something, and tell it to forget bots. This crate holds the parsing,
//! the SQLite directory and the reply composition; transports live elsewhere.
//!
//! # Example
//!
//! ```no_run
//! use botbot_core::{BotBot, BotBotConfig, InboundMessage};
//!
//! let config = BotBotConfig::builder().in_memory().build();
//! let mut bot = BotBot::new(&config)?;
//!
//! let mut replies: Vec<String> = Vec::new();
//! bot.handle(
//!     &InboundMessage::new("Who do you know?", "someone@example.com"),
//!     &mut replies,
//! );
//! # Ok::<(), botbot_core::BotBotError>(())
//! ```

pub mod bot;
pub mod compose;
pub mod config;
pub mod directory;
pub mod error;
pub mod intent;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use bot::{BotBot, ReplySender, USAGE};
pub use compose::{Composer, ForgetOutcome, PhraseBook, HELP_TEXT};
pub use config::BotBotConfig;
pub use directory::{DirectoryStore, SqliteDirectory};
pub use error::{BotBotError, BotBotResult};
pub use intent::{parse, strip_leading_mention, Intent, IntroductionMiss};
pub use text::{stem, stemmed_words};
pub use types::{AddOutcome, InboundMessage, Referent, FIRST_PERSON};
