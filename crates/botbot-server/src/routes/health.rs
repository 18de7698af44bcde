//! Health check endpoint.

use axum::{extract::State, Json};
use botbot_core::BotBotResult;
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub known_bots: usize,
    pub version: String,
}

/// Health check endpoint.
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let known: BotBotResult<usize> = state
        .with_bot(|bot| bot.directory().all_referents().map(|all| all.len()))
        .await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        known_bots: known?,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
