//! # ai2tg-core
//!
//! Shared pieces for the ai2tg workspace: YAML config loading ([`AppConfig`]),
//! tracing initialization, the error taxonomy and credential masking for logs.

pub mod config;
pub mod error;
pub mod logger;
pub mod mask;

pub use config::{
    load_app_config, load_config_file, AppConfig, ChatTarget, DEFAULT_CONFIG_PATH,
    DEFAULT_OPENAI_BASE_URL, DEFAULT_TELEGRAM_API_URL, REQUIRED_KEYS,
};
pub use error::{Ai2TgError, ConfigError, Result};
pub use logger::{init_tracing, log_filter};
pub use mask::mask_token;
