//! Prompting with bounded re-tries.
//!
//! Every question is asked at most `1 + max_retries` times. An empty answer
//! or one that fails to parse triggers a re-prompt; running out of attempts
//! returns [`CliError::RetriesExhausted`] and the caller decides whether to
//! quit.

use std::fmt::Display;
use std::io::{BufRead, Write};

use chrono::NaiveDate;
use imlend_core::{is_valid_email, parse_author_list, parse_date};

use crate::config::InputConfig;
use crate::error::{CliError, Result};

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    config: InputConfig,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, config: InputConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Print a line.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts a non-empty answer.
    ///
    /// `retry` is shown before each re-prompt after a rejected answer.
    pub fn ask_with<T, F>(&mut self, prompt: &str, retry: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let mut attempts = 0;
        loop {
            let answer = self.read_line(prompt)?;
            if answer.is_empty() {
                self.say("Error: Input can't be empty.")?;
            } else if let Some(value) = parse(&answer) {
                return Ok(value);
            } else {
                self.say(retry)?;
            }

            attempts += 1;
            if attempts > self.config.max_retries {
                tracing::debug!(prompt, attempts, "giving up on prompt");
                return Err(CliError::RetriesExhausted(prompt.trim().to_string()));
            }
        }
    }

    /// Any non-empty text
    pub fn ask_text(&mut self, prompt: &str) -> Result<String> {
        self.ask_with(prompt, "Error: Enter a value.", |s| Some(s.to_string()))
    }

    pub fn ask_u32(&mut self, prompt: &str) -> Result<u32> {
        self.ask_with(prompt, "Error: That's not a whole number.", |s| s.parse().ok())
    }

    pub fn ask_i32(&mut self, prompt: &str) -> Result<i32> {
        self.ask_with(prompt, "Error: That's not an integer.", |s| s.parse().ok())
    }

    pub fn ask_date(&mut self, prompt: &str) -> Result<NaiveDate> {
        let format = self.config.date_format.clone();
        let retry = format!("Error: Date not in format '{format}'.");
        self.ask_with(prompt, &retry, |s| parse_date(s, &format))
    }

    pub fn ask_email(&mut self, prompt: &str) -> Result<String> {
        self.ask_with(prompt, "Error: Enter a valid email address.", |s| {
            is_valid_email(s).then(|| s.to_string())
        })
    }

    /// Comma-separated list with at least one entry
    pub fn ask_list(&mut self, prompt: &str) -> Result<Vec<String>> {
        self.ask_with(prompt, "Error: Enter at least one name.", |s| {
            let items = parse_author_list(s);
            (!items.is_empty()).then_some(items)
        })
    }

    /// A 1-based index into a list of `len` items, returned zero-based.
    pub fn ask_index(&mut self, prompt: &str, len: usize) -> Result<usize> {
        let retry = format!("Error: Enter between 1 and {len}.");
        self.ask_with(prompt, &retry, |s| {
            s.parse::<usize>()
                .ok()
                .filter(|n| (1..=len).contains(n))
                .map(|n| n - 1)
        })
    }

    pub fn date_format(&self) -> &str {
        &self.config.date_format
    }

    #[cfg(test)]
    pub(crate) fn writer(&self) -> &W {
        &self.writer
    }
}
