//! OpenAI implementation of [`LlmClient`]: wraps openai-client with a fixed model.

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{LlmClient, LlmConfig};

/// [`LlmClient`] backed by openai-client.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            model,
        }
    }

    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model,
        }
    }

    /// Builds a client from any [`LlmConfig`] (API key, base URL, model).
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(
            config.api_key().to_string(),
            config.base_url().to_string(),
            config.model().to_string(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(prompt = %prompt, "Sending prompt");
        let text = self.client.complete(&self.model, prompt).await?;
        debug!(chars = text.chars().count(), "Received completion");
        Ok(text)
    }
}
