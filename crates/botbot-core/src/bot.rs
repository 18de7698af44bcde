//! Message dispatch.
//!
//! [`BotBot::handle`] is the single entry point for the transport: parse the
//! message, consult the directory, compose a reply and hand it back through a
//! [`ReplySender`].

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

use crate::compose::{Composer, ForgetOutcome, SOMETHING_WENT_WRONG};
use crate::config::BotBotConfig;
use crate::directory::{DirectoryStore, SqliteDirectory};
use crate::error::BotBotResult;
use crate::intent::{parse, Intent};
use crate::types::{InboundMessage, Referent};

/// One-line description of the bot.
pub const USAGE: &str = "BotBot! The Bot for learning about bots.";

/// Reply-sending capability of the transport.
pub trait ReplySender {
    fn send_reply(&mut self, message: &InboundMessage, reply: &str);
}

/// Collects replies in order.
impl ReplySender for Vec<String> {
    fn send_reply(&mut self, _message: &InboundMessage, reply: &str) {
        self.push(reply.to_string());
    }
}

/// The assistant: directory plus reply composition.
///
/// Messages are handled one at a time (`&mut self`); hosts that share a
/// `BotBot` across tasks put it behind a mutex.
pub struct BotBot {
    directory: Box<dyn DirectoryStore>,
    composer: Composer,
    bot_sender_marker: String,
    rng: StdRng,
}

impl BotBot {
    /// Open the directory named in `config`.
    pub fn new(config: &BotBotConfig) -> BotBotResult<Self> {
        let directory = SqliteDirectory::new(&config.db_path)?;
        Ok(Self::with_directory(Box::new(directory), config))
    }

    /// Use an existing directory store.
    pub fn with_directory(directory: Box<dyn DirectoryStore>, config: &BotBotConfig) -> Self {
        Self {
            directory,
            composer: Composer::new(config.phrases.clone()),
            bot_sender_marker: config.bot_sender_marker.clone(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn directory(&self) -> &dyn DirectoryStore {
        self.directory.as_ref()
    }

    pub fn usage(&self) -> &'static str {
        USAGE
    }

    /// Whether the message was sent by another bot.
    pub fn is_from_bot(&self, message: &InboundMessage) -> bool {
        !self.bot_sender_marker.is_empty() && message.sender_email.contains(&self.bot_sender_marker)
    }

    /// Handle one inbound message, sending at most one reply.
    ///
    /// Messages from bots get no reply. Storage failures are logged and
    /// answered with a generic apology.
    pub fn handle(&mut self, message: &InboundMessage, sender: &mut dyn ReplySender) {
        info!(sender = %message.sender_email, content = %message.content, "Received message");

        if self.is_from_bot(message) {
            // Bots don't talk to each other where humans can hear.
            info!(sender = %message.sender_email, "Dropping message from a bot");
            return;
        }

        let reply = self.respond(&message.content).unwrap_or_else(|e| {
            error!(error = %e, code = e.code().as_str(), "Failed to handle message");
            SOMETHING_WENT_WRONG.to_string()
        });
        sender.send_reply(message, &reply);
    }

    /// Compute the reply for a message body.
    pub fn respond(&mut self, content: &str) -> BotBotResult<String> {
        let intent = parse(content);
        debug!(?intent, "Parsed message");

        match intent {
            Intent::Thanks => Ok(self.composer.thanks(&mut self.rng)),
            Intent::Help => Ok(self.composer.help()),
            Intent::Forget(name) => {
                let outcome = self.forget(name)?;
                Ok(self.composer.forget(&outcome))
            }
            Intent::ListKnown => {
                let referents = self.directory.all_referents()?;
                Ok(self.composer.list_known(&referents))
            }
            Intent::Introduce(Ok(referent)) => self.introduce(&referent),
            Intent::Introduce(Err(miss)) => {
                debug!(%miss, "Introduction not understood");
                Ok(self.composer.introduction_not_understood())
            }
            Intent::TopicQuery(words) => {
                let found = self.who_can(&words)?;
                Ok(self.composer.topic_match(found.as_ref(), &mut self.rng))
            }
        }
    }

    fn introduce(&mut self, referent: &Referent) -> BotBotResult<String> {
        let outcome = self.directory.add_referent(referent)?;
        Ok(self.composer.introduction(referent, &outcome, &mut self.rng))
    }

    fn forget(&self, name: Option<String>) -> BotBotResult<ForgetOutcome> {
        let Some(name) = name else {
            return Ok(ForgetOutcome::NoName);
        };

        match self.directory.find_by_name(&name)? {
            None => Ok(ForgetOutcome::Unknown),
            Some(referent) if referent.is_first_person() => Ok(ForgetOutcome::Unforgettable),
            Some(_) => {
                self.directory.delete_referent(&name)?;
                Ok(ForgetOutcome::Forgotten(name))
            }
        }
    }

    /// First word, in message order, that some referent knows about.
    fn who_can(&self, words: &[String]) -> BotBotResult<Option<Referent>> {
        for word in words {
            if let Some(referent) = self.directory.find_by_topic(word)? {
                return Ok(Some(referent));
            }
        }
        Ok(None)
    }
}
