//! Webhook round trips through the router.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use botbot_core::{BotBot, BotBotConfig, HELP_TEXT};
use botbot_server::{create_server, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(token: Option<&str>) -> Router {
    let config = BotBotConfig::builder().in_memory().build();
    let bot = BotBot::new(&config).unwrap();
    create_server(AppState::new(bot, token.map(String::from)))
}

async fn post_webhook(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn message(content: &str, sender: &str) -> Value {
    json!({
        "data": content,
        "token": "secret",
        "message": {
            "content": content,
            "sender_email": sender,
            "type": "stream",
        }
    })
}

#[tokio::test]
async fn test_introduce_then_ask() {
    let app = app(None);

    let (status, body) = post_webhook(
        &app,
        message(
            "I'd like to introduce you to @**Pairing Bot!**, she knows about pair and pearing",
            "human@example.com",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["content"],
        "Thanks! I love meeting new people and can't wait to talk to her."
    );

    let (_, body) = post_webhook(&app, message("anyone for pearing?", "human@example.com")).await;
    let reply = body["content"].as_str().unwrap();
    assert!(reply.starts_with("My friend @**Pairing Bot!** can help you with that. She is "));
}

fn stream_mention(content: &str) -> Value {
    let mut body = message(&format!("@**BotBot** {}", content), "human@example.com");
    body["trigger"] = json!("mention");
    body["bot_full_name"] = json!("BotBot");
    body
}

#[tokio::test]
async fn test_stream_mention_reaches_keyword_intents() {
    let app = app(None);

    let (status, body) = post_webhook(&app, stream_mention("help")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], HELP_TEXT);

    let (_, body) = post_webhook(&app, stream_mention("who do you know?")).await;
    assert_eq!(body["content"], "I don't know anyone yet.");

    post_webhook(
        &app,
        stream_mention("introduce you to @Chef, he knows about recipes"),
    )
    .await;
    let (_, body) = post_webhook(&app, stream_mention("who do you know?")).await;
    assert_eq!(body["content"], "I know everyone: @**Chef**.");
}

#[tokio::test]
async fn test_stream_mention_without_bot_name() {
    let app = app(None);
    let mut body = message("@**BotBot** help", "human@example.com");
    body["trigger"] = json!("mention");

    let (_, body) = post_webhook(&app, body).await;
    assert_eq!(body["content"], HELP_TEXT);
}

#[tokio::test]
async fn test_bot_sender_needs_no_response() {
    let app = app(None);
    let (status, body) = post_webhook(&app, message("help", "echo-bot@example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response_not_required": true }));
}

#[tokio::test]
async fn test_token_is_checked_when_configured() {
    let app = app(Some("other-secret"));
    let (status, body) = post_webhook(&app, message("help", "human@example.com")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let app = self::app(Some("secret"));
    let (status, _) = post_webhook(&app, message("help", "human@example.com")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_counts_known_bots() {
    let app = app(None);
    post_webhook(
        &app,
        message("introduce you to @Chef, he knows about recipes", "human@example.com"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["known_bots"], 1);
}
