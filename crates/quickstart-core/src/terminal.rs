//! Terminal capabilities threaded explicitly through the prompt loop
//!
//! Color support and input encoding are resolved once at startup and passed
//! around as a [`TerminalOptions`] value instead of being read from process
//! globals at each prompt.

use colored::{ColoredString, Colorize};
use encoding_rs::Encoding;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// One-line notice printed when the user interrupts the session
pub const INTERRUPTED_NOTICE: &str = "[Interrupted.]";

/// Write the interruption notice on a line of its own.
///
/// Used for both Ctrl+C and end of input so the two look the same.
pub fn write_interrupted<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", INTERRUPTED_NOTICE)?;
    out.flush()
}

/// Encoding the terminal reports for its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEncoding {
    /// Any charset with a WHATWG label (UTF-8, ISO-8859-15, EUC-JP, ...)
    Known(&'static Encoding),
    /// Locale not set or charset not recognized
    Unknown,
}

impl TermEncoding {
    pub fn utf8() -> Self {
        TermEncoding::Known(encoding_rs::UTF_8)
    }

    /// Detect the encoding from the usual locale variables.
    ///
    /// `LC_ALL` wins over `LC_CTYPE`, which wins over `LANG`.
    pub fn detect() -> Self {
        Self::from_locale_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`TermEncoding::detect`] with an injectable variable lookup
    pub fn from_locale_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .filter_map(|name| lookup(*name))
            .find(|value| !value.is_empty());

        match locale {
            Some(value) => {
                let charset = value
                    .split_once('.')
                    .map(|(_, rest)| rest)
                    .unwrap_or("")
                    .split('@')
                    .next()
                    .unwrap_or("");
                charset.parse().unwrap_or(TermEncoding::Unknown)
            }
            None => TermEncoding::Unknown,
        }
    }
}

impl FromStr for TermEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "latin-1" is common on the command line but not a WHATWG label
        let label = match s.to_ascii_lowercase().as_str() {
            "latin-1" => "latin1".to_string(),
            other => other.to_string(),
        };
        Encoding::for_label(label.as_bytes())
            .map(TermEncoding::Known)
            .ok_or_else(|| format!("unsupported encoding '{}'", s))
    }
}

impl fmt::Display for TermEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermEncoding::Known(encoding) => write!(f, "{}", encoding.name()),
            TermEncoding::Unknown => write!(f, "unknown"),
        }
    }
}

/// Resolved terminal capabilities for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOptions {
    /// Whether ANSI styling may be emitted
    pub color: bool,
    pub encoding: TermEncoding,
}

impl TerminalOptions {
    /// Plain output with a known UTF-8 terminal
    pub fn plain() -> Self {
        Self {
            color: false,
            encoding: TermEncoding::utf8(),
        }
    }

    pub fn purple(&self, text: &str) -> String {
        self.paint(text, |s| s.purple())
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(text, |s| s.red())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |s| s.bold())
    }

    pub fn turquoise(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan())
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}
