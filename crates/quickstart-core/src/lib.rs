//! Quickstart Core - scaffolding for new Sphinx documentation projects
//!
//! The library asks the user a fixed series of questions, derives the values
//! the generated files need, and writes a `conf.py`, a master document and,
//! optionally, a Makefile and a Windows command file.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - validators, input decoding, escaping, template rendering
//! - **Layer 2: Workflow** - the [`wizard`] question flow and [`project::generate`]
//! - **Layer 3: CLI/TUI Interface** - cliclack-based session wiring (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the terminal front end in [`tui`]
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use quickstart_core::{prompt::Prompter, wizard, project, Derived, TerminalOptions};
//!
//! let mut prompter = Prompter::new(input, output, TerminalOptions::plain());
//! let answers = wizard::collect_answers(&mut prompter, &Default::default())?;
//! let derived = Derived::compute(&answers, &chrono::Local::now());
//! let project = project::generate(&answers, &derived).await?;
//! ```

pub mod config;
pub mod error;
pub mod project;
pub mod prompt;
pub mod session;
pub mod templates;
pub mod terminal;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::AnswerDefaults;
pub use error::QuickstartError;
pub use project::{generate, GeneratedProject};
pub use session::{Answers, Derived, Extension};
pub use terminal::{TermEncoding, TerminalOptions};

#[cfg(feature = "tui")]
pub use tui::run;
