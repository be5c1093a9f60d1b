//! Error types shared across the quickstart pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a quickstart run
#[derive(Debug, Error)]
pub enum QuickstartError {
    /// The user cancelled at a prompt (Ctrl+D / closed stdin)
    #[error("interrupted")]
    Interrupted,

    /// The user declined to pick a new root path after a conf.py conflict
    #[error("aborted: an existing conf.py was found and no new root path was given")]
    Aborted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A bundled template failed to parse
    #[error("invalid template '{name}': {source}")]
    Template {
        name: &'static str,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// A template referenced a value the context does not provide
    #[error("failed to render '{name}': {source}")]
    Render {
        name: &'static str,
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// The answers file could not be read or parsed
    #[error("invalid answers file {path}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, QuickstartError>;
