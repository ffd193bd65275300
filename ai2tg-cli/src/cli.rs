//! CLI parser.

use std::path::PathBuf;

use ai2tg_core::DEFAULT_CONFIG_PATH;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "ai2tg")]
#[command(about = "Post AI generated text to Telegram chat or channel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config file
    #[arg(short = 'c', value_name = "CONFIG_FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Custom prompt (topic) to pass to the model instead of a random topic
    #[arg(short = 'p', value_name = "CUSTOM_PROMPT")]
    pub prompt: Option<String>,

    /// Enable verbose output (DEBUG level)
    #[arg(short = 'd')]
    pub verbose: bool,

    /// Enable auto posting (no confirmation)
    #[arg(short = 'a')]
    pub autopost: bool,
}
