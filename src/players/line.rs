//! Human player typing guesses one per line.

use super::GuessSource;
use crate::games::hit_and_blow::{Guess, Qa};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};

/// Reads guesses from a line-oriented reader, skipping malformed lines.
pub struct LineInput<R> {
    name: String,
    lines: Lines<R>,
}

impl<R> LineInput<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Creates an input over any buffered reader.
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            lines: reader.lines(),
        }
    }
}

impl LineInput<BufReader<Stdin>> {
    /// Reads from the process's standard input.
    pub fn stdin(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait::async_trait]
impl<R> GuessSource for LineInput<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn next_guess(&mut self, _history: &[Qa]) -> Option<Guess> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    warn!(error = %e, "Failed to read input");
                    return None;
                }
            };

            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            match Guess::parse(text) {
                Ok(guess) => {
                    debug!(%guess, "Read guess");
                    return Some(guess);
                }
                Err(e) => {
                    warn!(error = %e, "Rejected input, try again");
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
