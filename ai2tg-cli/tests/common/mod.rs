//! Fakes shared by the pipeline tests: no network, no console.

#![allow(dead_code)]

use std::sync::Mutex;

use ai2tg_cli::Confirm;
use ai2tg_core::{Ai2TgError, AppConfig, ChatTarget, Result};
use async_trait::async_trait;
use llm_client::LlmClient;
use telegram_publisher::{PostReceipt, Publisher};

pub fn test_config() -> AppConfig {
    AppConfig {
        openai_key: "fake_key".to_string(),
        tg_key: "fake_tg_key".to_string(),
        tg_chat: ChatTarget::Username("@fakechannel".to_string()),
        ai_model: "gpt-test".to_string(),
        preamble: "Write about: ".to_string(),
        topics: vec!["cats".to_string(), "dogs".to_string()],
        openai_base_url: "http://127.0.0.1:1/v1".to_string(),
        tg_api_url: "http://127.0.0.1:1".to_string(),
    }
}

/// Returns a fixed reply (or error) and records every prompt it receives.
pub struct MockLlm {
    reply: std::result::Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

/// Records published texts; optionally fails every call.
#[derive(Default)]
pub struct MockPublisher {
    fail: bool,
    pub sent: Mutex<Vec<String>>,
}

impl MockPublisher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for MockPublisher {
    async fn publish(&self, text: &str) -> Result<PostReceipt> {
        self.sent.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(Ai2TgError::Publish("HTTP 500 Internal Server Error".to_string()));
        }
        Ok(PostReceipt {
            status: 200,
            body: serde_json::json!({ "ok": true }),
        })
    }
}

/// Answers every question with a fixed value and counts how often it was asked.
pub struct ScriptedConfirm {
    answer: bool,
    pub asked: usize,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: 0 }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, _question: &str) -> std::io::Result<bool> {
        self.asked += 1;
        Ok(self.answer)
    }
}
