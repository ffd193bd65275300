//! # telegram-publisher
//!
//! [`Publisher`] is the transport-agnostic seam used by the pipeline; [`TelegramPublisher`]
//! implements it with a single `sendMessage` POST to the Telegram Bot API.

mod markdown;
mod telegram;

use ai2tg_core::Result;
use async_trait::async_trait;

pub use markdown::normalize_markdown;
pub use telegram::{SendMessageRequest, TelegramPublisher, PARSE_MODE_MARKDOWN, SEND_TIMEOUT};

/// Outcome of a successful post: HTTP status and response body.
#[derive(Debug, Clone, PartialEq)]
pub struct PostReceipt {
    pub status: u16,
    /// Parsed JSON body, or the raw text as a JSON string when the body is not JSON.
    pub body: serde_json::Value,
}

/// Publishes generated text to a destination chat.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Sends `text` once. Transport failures and non-2xx responses are errors; nothing is retried.
    async fn publish(&self, text: &str) -> Result<PostReceipt>;
}
