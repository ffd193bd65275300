//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI implementation. The pipeline only sees the trait,
//! so tests can swap in a fake without network access.

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod openai_llm;

pub use config::LlmConfig;
pub use openai_llm::OpenAILlmClient;

/// Generates text for a fully composed prompt.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply for `prompt`. Provider failures are returned as errors, never retried.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
