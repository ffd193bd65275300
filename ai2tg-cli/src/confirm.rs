//! Interactive confirmation before posting.
//!
//! [`Confirm`] is injected into the pipeline so autopost and manual paths can be tested without a console.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub const CONFIRM_QUESTION: &str = "Continue with this post? (y/n): ";

/// Asks a yes/no question.
pub trait Confirm {
    /// Returns `true` only on an explicit yes.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Exactly `y`, case-insensitive, surrounding whitespace ignored.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Line-based confirmation over a reader/writer pair (stdin/stdout in the binary).
pub struct ConsoleConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl ConsoleConfirm<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for ConsoleConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        // EOF leaves `line` empty, which reads as "no".
        self.input.read_line(&mut line)?;
        Ok(is_yes(&line))
    }
}
