//! LLM configuration: trait and [`AppConfig`]-based implementation.

use ai2tg_core::AppConfig;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
}

impl LlmConfig for AppConfig {
    fn api_key(&self) -> &str {
        &self.openai_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.ai_model
    }
}
