//! YAML configuration: six required keys plus optional API base URLs.
//!
//! Loading is split in two steps so the raw mapping can be inspected on its own:
//! [`load_config_file`] reads and parses the document, [`AppConfig::from_mapping`]
//! checks required keys and builds the typed config.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::ConfigError;
use crate::mask::mask_token;

/// Config path used when `-c` is not given.
pub const DEFAULT_CONFIG_PATH: &str = ".config.yaml";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Keys every config must define, checked in this order.
pub const REQUIRED_KEYS: [&str; 6] = [
    "openai_key",
    "tg_key",
    "tg_chat",
    "ai_model",
    "preamble",
    "topics",
];

/// Destination chat: numeric id (`-1001234567890`) or public username (`@channel`).
///
/// Serialized untagged so Telegram receives the same JSON type the config used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatTarget {
    Id(i64),
    Username(String),
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatTarget::Id(id) => write!(f, "{}", id),
            ChatTarget::Username(name) => f.write_str(name),
        }
    }
}

/// Typed configuration. Read-only after load.
#[derive(Clone)]
pub struct AppConfig {
    /// `openai_key`
    pub openai_key: String,
    /// `tg_key`: Telegram bot token
    pub tg_key: String,
    /// `tg_chat`
    pub tg_chat: ChatTarget,
    /// `ai_model`
    pub ai_model: String,
    /// `preamble`: prefix prepended to the topic
    pub preamble: String,
    /// `topics`: candidates for random selection
    pub topics: Vec<String>,
    /// `openai_base_url` (optional)
    pub openai_base_url: String,
    /// `tg_api_url` (optional)
    pub tg_api_url: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_key", &mask_token(&self.openai_key))
            .field("tg_key", &mask_token(&self.tg_key))
            .field("tg_chat", &self.tg_chat)
            .field("ai_model", &self.ai_model)
            .field("preamble", &self.preamble)
            .field("topics", &self.topics)
            .field("openai_base_url", &self.openai_base_url)
            .field("tg_api_url", &self.tg_api_url)
            .finish()
    }
}

impl AppConfig {
    /// Builds the typed config from a parsed mapping.
    ///
    /// Fails with [`ConfigError::MissingKey`] on the first absent key of [`REQUIRED_KEYS`],
    /// before any value is type-checked. Unknown keys are ignored.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self, ConfigError> {
        if let Some(key) = REQUIRED_KEYS.iter().find(|k| !mapping.contains_key(**k)) {
            return Err(ConfigError::MissingKey(*key));
        }

        Ok(Self {
            openai_key: required(mapping, "openai_key")?,
            tg_key: required(mapping, "tg_key")?,
            tg_chat: required(mapping, "tg_chat")?,
            ai_model: required(mapping, "ai_model")?,
            preamble: required(mapping, "preamble")?,
            topics: required(mapping, "topics")?,
            openai_base_url: optional(mapping, "openai_base_url")?
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            tg_api_url: optional(mapping, "tg_api_url")?
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
        })
    }

    /// Checks values that deserialize fine but are unusable (base URLs must parse).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, url) in [
            ("openai_base_url", &self.openai_base_url),
            ("tg_api_url", &self.tg_api_url),
        ] {
            if let Err(e) = reqwest::Url::parse(url) {
                return Err(ConfigError::Invalid {
                    key: key.to_string(),
                    message: format!("not a valid URL ({}): {}", e, url),
                });
            }
        }
        Ok(())
    }
}

/// Reads `path` and parses it as a YAML mapping.
///
/// An empty document yields an empty mapping; any other non-mapping root is rejected.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<Mapping, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if raw.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&raw)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(ConfigError::NotAMapping),
    }
}

/// Loads `path` and builds an [`AppConfig`] from it.
pub fn load_app_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading config");
    let mapping = load_config_file(path)?;
    AppConfig::from_mapping(&mapping)
}

fn required<T: DeserializeOwned>(mapping: &Mapping, key: &str) -> Result<T, ConfigError> {
    optional(mapping, key)?.ok_or_else(|| ConfigError::Invalid {
        key: key.to_string(),
        message: "value is null".to_string(),
    })
}

fn optional<T: DeserializeOwned>(mapping: &Mapping, key: &str) -> Result<Option<T>, ConfigError> {
    match mapping.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_yaml::from_value(value.clone())
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                key: key.to_string(),
                message: e.to_string(),
            }),
    }
}
