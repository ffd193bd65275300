//! ai2tg: generate a post with an LLM and publish it to a Telegram chat or channel.
//!
//! Exit code 0 when the post was sent or declined at the prompt, 1 on any error.

use std::process::ExitCode;

use ai2tg_cli::{Cli, ConsoleConfirm, Pipeline, RunOutcome};
use ai2tg_core::{init_tracing, load_app_config, Result};
use clap::Parser;
use llm_client::OpenAILlmClient;
use telegram_publisher::TelegramPublisher;
use tracing::{debug, error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    debug!(custom_prompt = ?cli.prompt, "Custom string provided");
    debug!(args = ?cli, "Arguments received");

    match run(&cli).await {
        Ok(RunOutcome::Posted(receipt)) => {
            info!(status = receipt.status, "Posted to Telegram");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Declined) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads and validates the config, builds the real clients and runs the pipeline.
async fn run(cli: &Cli) -> Result<RunOutcome> {
    let config = load_app_config(&cli.config)?;
    config.validate()?;
    debug!(config = ?config, "Final parsed config");

    let llm = OpenAILlmClient::from_config(&config);
    let publisher = TelegramPublisher::from_config(&config)?;
    let mut confirm = ConsoleConfirm::stdio();
    let mut rng = rand::rng();

    let mut pipeline = Pipeline::new(&llm, &publisher, &mut confirm);
    let outcome = pipeline
        .run(&config, cli.prompt.as_deref(), cli.autopost, &mut rng)
        .await?;
    Ok(outcome)
}
