//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for non-streaming chat completion.
//! Logs the masked API key and token usage; automatic retries of the underlying client are disabled.

use std::sync::Arc;
use std::time::Duration;

use ai2tg_core::mask_token;
use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use tracing::{debug, info};

pub use async_openai::types::{ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs};

/// Backoff policy that gives up on the first failure.
fn no_retry() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoff {
        max_elapsed_time: Some(Duration::ZERO),
        ..Default::default()
    }
}

/// OpenAI chat client. Wraps async-openai client; holds the API key only for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    api_key_for_logging: String,
}

impl OpenAIClient {
    /// Builds a client for the default API base URL.
    pub fn new(api_key: String) -> Self {
        Self::from_config(OpenAIConfig::new().with_api_key(api_key.clone()), api_key)
    }

    /// Builds a client with a custom base URL (proxies, compatible endpoints, test servers).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self::from_config(config, api_key)
    }

    fn from_config(config: OpenAIConfig, api_key: String) -> Self {
        let client = Client::with_config(config).with_backoff(no_retry());
        Self {
            client: Arc::new(client),
            api_key_for_logging: api_key,
        }
    }

    /// Sends `prompt` as a single user message and returns the reply text.
    pub async fn complete(&self, model: &str, prompt: &str) -> anyhow::Result<String> {
        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?
            .into();
        self.chat_completion(model, vec![message]).await
    }

    /// Sends a chat completion request and returns the first choice's content.
    ///
    /// Errors if the provider rejects the request or returns no choices.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> anyhow::Result<String> {
        info!(
            model = %model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key_for_logging),
            "OpenAI chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No response from OpenAI"),
        }
    }
}
