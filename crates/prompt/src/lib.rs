//! # Prompt
//!
//! Builds the text sent to the model: `preamble + topic`.
//!
//! ## Topic
//!
//! - **Explicit** (`-p`): used verbatim, no randomness consumed.
//! - **Random**: drawn uniformly from the configured topic list.
//!
//! The random source is passed in by the caller so selection can be made
//! deterministic (e.g. a seeded `StdRng` in tests).

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

/// Errors from topic selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("topic list is empty and no custom prompt was given")]
    NoTopics,
}

/// Picks one topic uniformly at random.
pub fn choose_topic<'a, T, R>(topics: &'a [T], rng: &mut R) -> Result<&'a str, PromptError>
where
    T: AsRef<str>,
    R: Rng + ?Sized,
{
    topics
        .choose(rng)
        .map(|t| t.as_ref())
        .ok_or(PromptError::NoTopics)
}

/// Returns `custom` when given, otherwise a random entry of `topics`.
pub fn resolve_topic<T, R>(
    custom: Option<&str>,
    topics: &[T],
    rng: &mut R,
) -> Result<String, PromptError>
where
    T: AsRef<str>,
    R: Rng + ?Sized,
{
    match custom {
        Some(topic) => Ok(topic.to_string()),
        None => choose_topic(topics, rng).map(str::to_string),
    }
}

/// Concatenates preamble and topic; no delimiter is inserted.
pub fn compose_prompt(preamble: &str, topic: &str) -> String {
    let mut out = String::with_capacity(preamble.len() + topic.len());
    out.push_str(preamble);
    out.push_str(topic);
    out
}
