//! Telegram Bot API transport: `POST {api_url}/bot{token}/sendMessage`.

use std::time::Duration;

use ai2tg_core::{Ai2TgError, AppConfig, ChatTarget, Result, DEFAULT_TELEGRAM_API_URL};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::markdown::normalize_markdown;
use crate::{PostReceipt, Publisher};

/// `parse_mode` sent with every message.
pub const PARSE_MODE_MARKDOWN: &str = "Markdown";

/// Upper bound for the whole sendMessage call.
pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON body of a sendMessage call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a ChatTarget,
    pub text: String,
    pub parse_mode: &'static str,
}

impl<'a> SendMessageRequest<'a> {
    /// Builds the request, applying [`normalize_markdown`] to `text`.
    pub fn new(chat_id: &'a ChatTarget, text: &str) -> Self {
        Self {
            chat_id,
            text: normalize_markdown(text),
            parse_mode: PARSE_MODE_MARKDOWN,
        }
    }
}

/// Reqwest-based implementation of [`Publisher`].
pub struct TelegramPublisher {
    http: reqwest::Client,
    api_url: String,
    token: String,
    chat: ChatTarget,
}

impl TelegramPublisher {
    /// Creates a publisher for the public Bot API.
    pub fn new(token: String, chat: ChatTarget) -> Result<Self> {
        Self::with_api_url(DEFAULT_TELEGRAM_API_URL, token, chat)
    }

    /// Creates a publisher for a custom Bot API server (self-hosted or mock).
    pub fn with_api_url(api_url: impl Into<String>, token: String, chat: ChatTarget) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| Ai2TgError::Publish(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            token,
            chat,
        })
    }

    /// Creates a publisher from `tg_api_url`, `tg_key` and `tg_chat`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::with_api_url(
            config.tg_api_url.clone(),
            config.tg_key.clone(),
            config.tg_chat.clone(),
        )
    }

    pub fn chat(&self) -> &ChatTarget {
        &self.chat
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_url.trim_end_matches('/'),
            self.token
        )
    }
}

#[async_trait]
impl Publisher for TelegramPublisher {
    #[instrument(skip(self, text), fields(chat = %self.chat))]
    async fn publish(&self, text: &str) -> Result<PostReceipt> {
        let request = SendMessageRequest::new(&self.chat, text);

        // The URL carries the bot token; strip it from transport errors.
        let response = self
            .http
            .post(self.send_message_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| Ai2TgError::Publish(e.without_url().to_string()))?;

        let status = response.status();
        info!(status = status.as_u16(), "Telegram sendMessage response");

        let raw = response
            .text()
            .await
            .map_err(|e| Ai2TgError::Publish(e.without_url().to_string()))?;
        let body = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
        debug!(body = %body, "Telegram sendMessage body");

        if !status.is_success() {
            let description = body
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("no description");
            return Err(Ai2TgError::Publish(format!("HTTP {}: {}", status, description)));
        }

        Ok(PostReceipt {
            status: status.as_u16(),
            body,
        })
    }
}
