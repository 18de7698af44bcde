//! Server state management.

use std::sync::{Arc, Mutex};

use botbot_core::BotBot;

use crate::error::{ApiError, ApiResult};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    bot: Arc<Mutex<BotBot>>,
    webhook_token: Option<Arc<str>>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// When `webhook_token` is set, webhook requests must carry it.
    pub fn new(bot: BotBot, webhook_token: Option<String>) -> Self {
        Self {
            bot: Arc::new(Mutex::new(bot)),
            webhook_token: webhook_token.filter(|t| !t.is_empty()).map(Arc::from),
        }
    }

    /// Whether webhook requests are authenticated.
    pub fn requires_token(&self) -> bool {
        self.webhook_token.is_some()
    }

    /// Check the token sent with a webhook request.
    pub fn verify_token(&self, token: Option<&str>) -> ApiResult<()> {
        match &self.webhook_token {
            Some(expected) if token != Some(expected.as_ref()) => {
                Err(ApiError::unauthorized("invalid webhook token"))
            }
            _ => Ok(()),
        }
    }

    /// Run `f` with exclusive access to the bot on the blocking pool.
    ///
    /// The bot is locked for the whole call, so messages are handled one at a
    /// time.
    pub async fn with_bot<F, T>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&mut BotBot) -> T + Send + 'static,
        T: Send + 'static,
    {
        let bot = Arc::clone(&self.bot);
        tokio::task::spawn_blocking(move || -> ApiResult<T> {
            let mut guard = bot
                .lock()
                .map_err(|_| ApiError::internal("bot state lock poisoned"))?;
            Ok(f(&mut guard))
        })
        .await
        .map_err(|e| ApiError::internal(format!("message task failed: {}", e)))?
    }
}
