//! botbot-server - Outgoing-webhook server for botbot.
//!
//! # Example
//!
//! ```ignore
//! use botbot_core::{BotBot, BotBotConfig};
//! use botbot_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let bot = BotBot::new(&BotBotConfig::default()).unwrap();
//!     let app = create_server(AppState::new(bot, None));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
