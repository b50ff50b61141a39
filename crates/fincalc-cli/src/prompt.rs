//! Console prompting.
//!
//! Values are read one whitespace-separated token at a time, so a user (or a
//! pipe) may answer several prompts on a single line: `1000 10 5.5`.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use colored::Colorize;
use fincalc_core::input::{parse_value, Field};
use fincalc_core::FinCalcError;
use tracing::{debug, info, warn};

use crate::error::CliResult;

/// Default number of attempts per field before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// What the input stream produced for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Token(String),
    Blank,
    Eof,
}

/// Reads numeric answers from `input`, writing prompts to `prompts` and
/// retry messages to `diagnostics`.
pub struct Prompter<R, W, E> {
    input: R,
    prompts: W,
    diagnostics: E,
    pending: VecDeque<String>,
    show_prompts: bool,
    max_attempts: u32,
    prompted: bool,
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    /// Creates a prompter.
    pub fn new(input: R, prompts: W, diagnostics: E) -> Self {
        Self {
            input,
            prompts,
            diagnostics,
            pending: VecDeque::new(),
            show_prompts: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            prompted: false,
        }
    }

    /// Enables or disables printing of prompts.
    pub fn with_prompts(mut self, show: bool) -> Self {
        self.show_prompts = show;
        self
    }

    /// Sets how many malformed answers are tolerated per field.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Returns true once at least one prompt has been written.
    pub fn has_prompted(&self) -> bool {
        self.prompted
    }

    /// Consumes the prompter and returns the prompt writer.
    pub fn into_prompts(self) -> W {
        self.prompts
    }

    /// Asks for `field` until a number is entered.
    ///
    /// A blank line or end of input yields `default` when one is given.
    /// Without a default, blank lines re-prompt and end of input is a
    /// `MissingInput` error. Malformed answers re-prompt until
    /// `max_attempts` is exhausted.
    pub fn read_value(&mut self, field: Field, default: Option<f64>) -> CliResult<f64> {
        let mut failures = 0;

        loop {
            self.show_prompt(field)?;

            let token = match self.next_answer()? {
                Answer::Token(token) => token,
                Answer::Blank => match default {
                    Some(value) => {
                        info!(%field, value, "blank answer, using default");
                        return Ok(value);
                    }
                    None => continue,
                },
                Answer::Eof => {
                    return match default {
                        Some(value) => {
                            info!(%field, value, "end of input, using default");
                            Ok(value)
                        }
                        None => Err(FinCalcError::missing_input(field).into()),
                    };
                }
            };

            match parse_value(field, &token) {
                Ok(value) => {
                    debug!(%field, value, "read value");
                    return Ok(value);
                }
                Err(err) => {
                    failures += 1;
                    warn!(%field, input = %token, attempt = failures, "malformed input");
                    if failures >= self.max_attempts {
                        return Err(err.into());
                    }
                    writeln!(self.diagnostics, "{} {}", "✗".red(), err)?;
                    // The rest of a bad line is not trusted either.
                    self.pending.clear();
                }
            }
        }
    }

    fn show_prompt(&mut self, field: Field) -> CliResult<()> {
        if !self.show_prompts {
            return Ok(());
        }
        write!(self.prompts, "{} ", field.prompt())?;
        self.prompts.flush()?;
        self.prompted = true;
        Ok(())
    }

    fn next_answer(&mut self) -> CliResult<Answer> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(Answer::Token(token));
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Answer::Eof);
        }

        self.pending.extend(line.split_whitespace().map(str::to_string));
        Ok(self.pending.pop_front().map_or(Answer::Blank, Answer::Token))
    }
}
