//! Interactive prompts over an injectable input/output pair.
//!
//! The binary wires `Prompter` to locked stdin/stdout; tests drive it with
//! an in-memory `Cursor` and a `Vec<u8>` sink.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

pub const PAUSE_PROMPT: &str = "Press any key to continue...";

pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Output sink shared with the reporters.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Print `prompt` and read one line (without the trailing newline).
    /// End-of-file yields `AppError::InputClosed`.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        // Bytes first: undecodable input becomes U+FFFD and fails validation
        // instead of aborting the session.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until every comma-separated token belongs to `valid`.
    /// Tokens come back trimmed and lower-cased, in the order typed.
    pub fn choose(&mut self, prompt: &str, valid: &[&str]) -> AppResult<Vec<String>> {
        let full_prompt = format!("{prompt}\n(valid answer: {} )\n>", valid.join(","));

        loop {
            let answer = self.ask(&full_prompt)?;
            let tokens = split_answer(&answer);
            let invalid: Vec<&str> = tokens
                .iter()
                .filter(|t| !valid.iter().any(|v| v.eq_ignore_ascii_case(t)))
                .map(String::as_str)
                .collect();

            if invalid.is_empty() {
                log::debug!("accepted answer {tokens:?}");
                return Ok(tokens);
            }

            writeln!(
                self.out,
                "Something is not right. Please mind the formatting and be sure to enter a valid option\n Invalid answer {}",
                invalid.join(",")
            )?;
        }
    }

    /// Ask a `y`/`n` question until one of the two is given.
    /// Any other answer is reported and waits for a key press before asking again.
    pub fn yes_no(&mut self, prompt: &str) -> AppResult<bool> {
        loop {
            match self.ask(prompt)?.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {
                    writeln!(self.out, "Invalid answer, please type again\n")?;
                    self.ask(PAUSE_PROMPT)?;
                    writeln!(self.out)?;
                }
            }
        }
    }

    /// Block until the user presses enter.
    pub fn pause(&mut self) -> AppResult<()> {
        self.ask(&format!("{PAUSE_PROMPT}\n{}", "-".repeat(30)))?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn line<T: std::fmt::Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(self.out, "{msg}")
    }
}

/// Split a comma-separated answer into trimmed, lower-cased tokens.
pub fn split_answer(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .collect()
}
