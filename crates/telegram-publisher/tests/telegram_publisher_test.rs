//! Integration tests for `TelegramPublisher` against a mockito server standing in for the Bot API.
//!
//! Path format is `/bot<token>/sendMessage`.

use ai2tg_core::{Ai2TgError, ChatTarget};
use mockito::Matcher;
use serde_json::json;
use telegram_publisher::{Publisher, TelegramPublisher};

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

fn send_message_path() -> String {
    format!("/bot{}/sendMessage", TEST_BOT_TOKEN)
}

fn publisher(server: &mockito::ServerGuard, chat: ChatTarget) -> TelegramPublisher {
    TelegramPublisher::with_api_url(server.url(), TEST_BOT_TOKEN.to_string(), chat).unwrap()
}

#[tokio::test]
async fn publish_posts_normalized_markdown() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", send_message_path().as_str())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "chat_id": "@fakechannel",
            "text": "Hello, *Telegram*!",
            "parse_mode": "Markdown"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true, "result": {"message_id": 1, "date": 1706529600, "chat": {"id": -100123, "type": "channel"}}}"#)
        .expect(1)
        .create_async()
        .await;

    let publisher = publisher(&server, ChatTarget::Username("@fakechannel".to_string()));
    let receipt = publisher.publish("Hello, **Telegram**!").await.unwrap();

    assert_eq!(receipt.status, 200);
    assert_eq!(receipt.body["ok"], json!(true));
    mock.assert_async().await;
}

#[tokio::test]
async fn publish_sends_numeric_chat_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", send_message_path().as_str())
        .match_body(Matcher::PartialJson(json!({ "chat_id": -1001234567890i64 })))
        .with_status(200)
        .with_body(r#"{"ok": true}"#)
        .expect(1)
        .create_async()
        .await;

    let publisher = publisher(&server, ChatTarget::Id(-1001234567890));
    publisher.publish("text").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn publish_fails_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", send_message_path().as_str())
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create_async()
        .await;

    let publisher = publisher(&server, ChatTarget::Username("@fakechannel".to_string()));
    let err = publisher.publish("Test text").await.unwrap_err();

    assert!(matches!(err, Ai2TgError::Publish(_)));
    assert!(err.to_string().contains("500"), "{}", err);
    mock.assert_async().await;
}

#[tokio::test]
async fn publish_reports_telegram_description() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", send_message_path().as_str())
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#)
        .create_async()
        .await;

    let publisher = publisher(&server, ChatTarget::Username("@missing".to_string()));
    let err = publisher.publish("text").await.unwrap_err();

    assert!(err.to_string().contains("chat not found"), "{}", err);
}

#[tokio::test]
async fn publish_transport_error_hides_token() {
    // Port 1 is not listening; the connection is refused.
    let publisher = TelegramPublisher::with_api_url(
        "http://127.0.0.1:1",
        TEST_BOT_TOKEN.to_string(),
        ChatTarget::Id(1),
    )
    .unwrap();

    let err = publisher.publish("text").await.unwrap_err();

    assert!(matches!(err, Ai2TgError::Publish(_)));
    assert!(!err.to_string().contains(TEST_BOT_TOKEN));
}
