//! Generate-then-publish pipeline: topic → prompt → LLM → (confirm) → Telegram.
//!
//! Components are borrowed trait objects so tests can substitute fakes for the LLM,
//! the publisher and the console.

use ai2tg_core::{Ai2TgError, AppConfig, Result};
use llm_client::LlmClient;
use prompt::{compose_prompt, resolve_topic};
use rand::Rng;
use telegram_publisher::{PostReceipt, Publisher};
use tracing::{debug, info};

use crate::confirm::{Confirm, CONFIRM_QUESTION};

/// How a run ended without error.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Text was sent; carries the Telegram response.
    Posted(PostReceipt),
    /// The user answered anything but `y`; nothing was sent.
    Declined,
}

/// Resolves the topic, composes the prompt and asks the model for text.
pub async fn generate_text<R>(
    config: &AppConfig,
    custom_topic: Option<&str>,
    llm: &dyn LlmClient,
    rng: &mut R,
) -> Result<String>
where
    R: Rng + ?Sized,
{
    let topic = resolve_topic(custom_topic, &config.topics, rng)
        .map_err(|e| Ai2TgError::Prompt(e.to_string()))?;
    info!(topic = %topic, "Topic selected");

    let prompt = compose_prompt(&config.preamble, &topic);
    debug!(prompt = %prompt, "Prompt composed");

    llm.generate(&prompt)
        .await
        .map_err(|e| Ai2TgError::Llm(format!("{:#}", e)))
}

/// Logs the proposed text, asks for confirmation unless `autopost`, then publishes once.
pub async fn publish_with_confirmation(
    text: &str,
    autopost: bool,
    confirm: &mut dyn Confirm,
    publisher: &dyn Publisher,
) -> Result<RunOutcome> {
    info!("{}", text);

    if !autopost && !confirm.confirm(CONFIRM_QUESTION)? {
        info!("Post declined, nothing sent");
        return Ok(RunOutcome::Declined);
    }

    info!("Posting...");
    let receipt = publisher.publish(text).await?;
    Ok(RunOutcome::Posted(receipt))
}

/// Wires an LLM client, a publisher and a confirmation source for one run.
pub struct Pipeline<'a> {
    llm: &'a dyn LlmClient,
    publisher: &'a dyn Publisher,
    confirm: &'a mut dyn Confirm,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        llm: &'a dyn LlmClient,
        publisher: &'a dyn Publisher,
        confirm: &'a mut dyn Confirm,
    ) -> Self {
        Self {
            llm,
            publisher,
            confirm,
        }
    }

    /// Runs the whole pipeline once. Every failure is returned; nothing is retried.
    pub async fn run<R>(
        &mut self,
        config: &AppConfig,
        custom_topic: Option<&str>,
        autopost: bool,
        rng: &mut R,
    ) -> Result<RunOutcome>
    where
        R: Rng + ?Sized,
    {
        let text = generate_text(config, custom_topic, self.llm, rng).await?;
        publish_with_confirmation(&text, autopost, &mut *self.confirm, self.publisher).await
    }
}
