//! # ai2tg-cli
//!
//! Entry-point pieces: argument parsing ([`Cli`]), the confirmation capability ([`Confirm`])
//! and the generate-then-publish [`Pipeline`].

pub mod cli;
pub mod confirm;
pub mod pipeline;

pub use cli::Cli;
pub use confirm::{is_yes, Confirm, ConsoleConfirm, CONFIRM_QUESTION};
pub use pipeline::{generate_text, publish_with_confirmation, Pipeline, RunOutcome};
