//! Error types for ai2tg.
//!
//! [`Ai2TgError`] is the top-level error returned to the entry point; [`ConfigError`] covers config loading.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error (config, prompt, LLM provider, Telegram, IO). Every variant ends the run with exit code 1.
#[derive(Error, Debug)]
pub enum Ai2TgError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Failed to post to Telegram: {0}")]
    Publish(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while reading, parsing or validating the YAML config.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found - {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Config root must be a mapping")]
    NotAMapping,

    #[error("Missing required config key: {0}")]
    MissingKey(&'static str),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Result type for ai2tg operations; uses [`Ai2TgError`].
pub type Result<T> = std::result::Result<T, Ai2TgError>;
