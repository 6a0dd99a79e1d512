//! Line-oriented prompts over any reader/writer pair.
//!
//! Every read returns `Ok(None)` once input is exhausted so the caller can
//! wind the session down instead of prompting forever.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use anyhow::Context;

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write `text` as-is and flush, so prompts show before the read.
    pub fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .context("failed to write to console")
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompt until the user enters an integer inside `range`. Anything else
    /// (non-numeric, negative, out of range) prints `retry` and asks again.
    pub fn read_bounded(
        &mut self,
        prompt: &str,
        range: &RangeInclusive<u32>,
        retry: &str,
    ) -> anyhow::Result<Option<u32>> {
        loop {
            self.say(prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_bounded(&line, range) {
                Some(value) => return Ok(Some(value)),
                None => {
                    tracing::debug!(input = line.trim(), "rejected numeric input");
                    self.say(&format!("{retry}\n"))?;
                }
            }
        }
    }

    /// Prompt once, then return the first whitespace-delimited token. Blank
    /// lines are skipped without repeating the prompt.
    pub fn read_token(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.say(prompt)?;
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_owned()));
            }
        }
    }
}

fn parse_bounded(line: &str, range: &RangeInclusive<u32>) -> Option<u32> {
    let value: i64 = line.trim().parse().ok()?;
    u32::try_from(value).ok().filter(|v| range.contains(v))
}
