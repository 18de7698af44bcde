//! botbot-server - Outgoing-webhook server binary.

use std::net::SocketAddr;

use botbot_core::{BotBot, BotBotConfig};
use botbot_server::{create_server, AppState};
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// `BOTBOT_CONFIG` file if set, then environment overrides.
fn load_config() -> Result<BotBotConfig, Box<dyn std::error::Error>> {
    let config = match std::env::var("BOTBOT_CONFIG") {
        Ok(path) => {
            info!("Loading configuration from {}", path);
            BotBotConfig::from_file(path)?
        }
        Err(_) => BotBotConfig::default(),
    };
    Ok(config.with_env_overrides())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive(Level::INFO.into())
                .add_directive("botbot_server=debug".parse()?),
        )
        .init();

    // Get configuration from environment
    let host = std::env::var("BOTBOT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("BOTBOT_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;
    let webhook_token = std::env::var("BOTBOT_WEBHOOK_TOKEN").ok();

    let config = load_config()?;
    let bot = BotBot::new(&config)?;
    info!(db_path = %config.db_path.display(), "Bot directory opened");

    let state = AppState::new(bot, webhook_token);
    if state.requires_token() {
        info!("Webhook token verification enabled");
    } else {
        info!("Webhook token verification disabled");
    }

    let app = create_server(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting botbot-server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Server stopped cleanly");
    Ok(())
}
