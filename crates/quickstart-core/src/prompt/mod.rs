//! Line-based prompt loop with validation and retry
//!
//! The loop is generic over its input and output so the same code drives the
//! real terminal and scripted tests.

pub mod encoding;
pub mod validate;

use crate::error::{QuickstartError, Result};
use crate::terminal::TerminalOptions;
use encoding::{decode_input, trim_line_ending};
use std::io::{BufRead, Write};
use validate::Validation;

pub const PROMPT_PREFIX: &str = "> ";

const ENCODING_NOTE: &str = "* Note: non-ASCII characters entered and terminal encoding unknown \
                             -- assuming UTF-8 or Latin-1.";

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    terminal: TerminalOptions,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, terminal: TerminalOptions) -> Self {
        Self {
            input,
            output,
            terminal,
        }
    }

    /// Print a line of explanatory text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print a line in bold
    pub fn say_bold(&mut self, text: &str) -> Result<()> {
        let styled = self.terminal.bold(text);
        self.say(&styled)
    }

    /// Ask until `validator` accepts the answer.
    ///
    /// An empty answer is replaced by `default` when the default is non-empty.
    /// Otherwise the empty string itself goes through the validator, so a
    /// required field cannot be skipped.
    pub fn ask<T, V>(&mut self, text: &str, default: Option<&str>, validator: V) -> Result<T>
    where
        V: Fn(&str) -> Validation<T>,
    {
        let default = default.filter(|d| !d.is_empty());
        let prompt = match default {
            Some(d) => format!("{}{} [{}]: ", PROMPT_PREFIX, text, d),
            None => format!("{}{}: ", PROMPT_PREFIX, text),
        };

        loop {
            write!(self.output, "{}", self.terminal.purple(&prompt))?;
            self.output.flush()?;

            let raw = self.read_line()?;
            let answer = match default {
                Some(d) if raw.is_empty() => d.to_string(),
                _ => {
                    let decoded = decode_input(&raw, self.terminal.encoding);
                    if decoded.guessed {
                        let note = self.terminal.turquoise(ENCODING_NOTE);
                        self.say(&note)?;
                    }
                    decoded.text
                }
            };

            match validator(&answer) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    let message = self.terminal.red(&format!("* {}", err));
                    self.say(&message)?;
                }
            }
        }
    }

    /// Read one line, treating end of input as an interruption
    fn read_line(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(QuickstartError::Interrupted);
        }
        Ok(trim_line_ending(buf))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
