//! Outgoing-webhook endpoint.
//!
//! The chat platform POSTs every message addressed to the bot and expects
//! either `{"content": "..."}` or `{"response_not_required": true}` back.

use axum::{extract::State, Json};
use botbot_core::{strip_leading_mention, InboundMessage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Request body sent by the chat platform.
#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    /// Shared secret configured for the outgoing webhook.
    #[serde(default)]
    pub token: Option<String>,
    /// Full name of the bot user the webhook belongs to.
    #[serde(default)]
    pub bot_full_name: Option<String>,
    /// The message that triggered the webhook.
    pub message: InboundMessage,
}

/// Response for the chat platform.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum WebhookResponse {
    Reply { content: String },
    NoReply { response_not_required: bool },
}

/// Handle one chat message.
/// POST /webhook
pub async fn handle_message(
    State(state): State<AppState>,
    Json(request): Json<WebhookRequest>,
) -> ApiResult<Json<WebhookResponse>> {
    state.verify_token(request.token.as_deref())?;

    // Stream messages reach the bot with its own mention in front.
    let content = strip_leading_mention(
        &request.message.content,
        request.bot_full_name.as_deref(),
    );
    let message = InboundMessage::new(content, request.message.sender_email.clone());
    let replies = state
        .with_bot(move |bot| {
            let mut replies: Vec<String> = Vec::new();
            bot.handle(&message, &mut replies);
            replies
        })
        .await?;

    let response = match replies.into_iter().next() {
        Some(content) => WebhookResponse::Reply { content },
        None => {
            debug!("No reply for message");
            WebhookResponse::NoReply {
                response_not_required: true,
            }
        }
    };
    Ok(Json(response))
}
