//! Answers collected during one quickstart run and the values derived from them

use crate::templates::escape::{make_filename, py_string_escape, tex_escape};
use chrono::{DateTime, TimeZone};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Sphinx extensions the wizard offers, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    Autodoc,
    Doctest,
    Intersphinx,
    Todo,
    Coverage,
    Pngmath,
    Jsmath,
    Ifconfig,
}

impl Extension {
    pub const ALL: [Extension; 8] = [
        Extension::Autodoc,
        Extension::Doctest,
        Extension::Intersphinx,
        Extension::Todo,
        Extension::Coverage,
        Extension::Pngmath,
        Extension::Jsmath,
        Extension::Ifconfig,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Extension::Autodoc => "autodoc",
            Extension::Doctest => "doctest",
            Extension::Intersphinx => "intersphinx",
            Extension::Todo => "todo",
            Extension::Coverage => "coverage",
            Extension::Pngmath => "pngmath",
            Extension::Jsmath => "jsmath",
            Extension::Ifconfig => "ifconfig",
        }
    }

    /// Fully qualified module name used in `conf.py`
    pub fn module(&self) -> String {
        format!("sphinx.ext.{}", self.name())
    }

    /// Question text shown by the wizard
    pub fn description(&self) -> &'static str {
        match self {
            Extension::Autodoc => "automatically insert docstrings from modules",
            Extension::Doctest => "automatically test code snippets in doctest blocks",
            Extension::Intersphinx => "link between Sphinx documentation of different projects",
            Extension::Todo => "write \"todo\" entries that can be shown or hidden on build",
            Extension::Coverage => "checks for documentation coverage",
            Extension::Pngmath => "include math, rendered as PNG images",
            Extension::Jsmath => "include math, rendered in the browser by JSMath",
            Extension::Ifconfig => "conditional inclusion of content based on config values",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Drop pngmath when jsmath is also selected.
///
/// Returns true when something was deselected.
pub fn resolve_math_conflict(extensions: &mut Vec<Extension>) -> bool {
    if extensions.contains(&Extension::Pngmath) && extensions.contains(&Extension::Jsmath) {
        extensions.retain(|e| *e != Extension::Pngmath);
        return true;
    }
    false
}

/// Everything the user answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Root path for the documentation
    pub path: PathBuf,
    /// Separate `source` and `build` directories
    pub sep: bool,
    /// Prefix for the templates, static and build dirs
    pub dot: String,
    pub project: String,
    pub author: String,
    pub version: String,
    pub release: String,
    pub suffix: String,
    /// Master document name without suffix
    pub master: String,
    /// Enabled extensions, in [`Extension::ALL`] order
    pub extensions: Vec<Extension>,
    pub makefile: bool,
    pub batchfile: bool,
}

impl Answers {
    pub fn has_extension(&self, ext: Extension) -> bool {
        self.extensions.contains(&ext)
    }

    pub fn master_file_name(&self) -> String {
        format!("{}{}", self.master, self.suffix)
    }
}

/// Values computed from the answers once all questions are done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    /// Filename-safe project identifier
    pub project_fn: String,
    /// Human timestamp written into file headers
    pub now: String,
    /// One `=` per character of the project name
    pub underline: String,
    /// Python list body of enabled extension modules
    pub extensions: String,
    pub copyright: String,
    pub author_texescaped: String,
    pub project_doc: String,
    pub project_doc_texescaped: String,

    // Python string literal safe variants
    pub project_str: String,
    pub copyright_str: String,
    pub author_texescaped_str: String,
    pub project_doc_texescaped_str: String,
    pub version_str: String,
    pub release_str: String,
    pub master_str: String,
}

impl Derived {
    pub fn compute<Tz>(answers: &Answers, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let extensions = answers
            .extensions
            .iter()
            .map(|e| format!("'{}'", e.module()))
            .collect::<Vec<_>>()
            .join(", ");
        let copyright = format!("{}, {}", now.format("%Y"), answers.author);
        let author_texescaped = tex_escape(&answers.author);
        let project_doc = format!("{} Documentation", answers.project);
        let project_doc_texescaped = tex_escape(&project_doc);

        Self {
            project_fn: make_filename(&answers.project),
            now: now.format("%a %b %e %H:%M:%S %Y").to_string(),
            underline: underline(&answers.project),
            extensions,
            project_str: py_string_escape(&answers.project),
            copyright_str: py_string_escape(&copyright),
            author_texescaped_str: py_string_escape(&author_texescaped),
            project_doc_texescaped_str: py_string_escape(&project_doc_texescaped),
            version_str: py_string_escape(&answers.version),
            release_str: py_string_escape(&answers.release),
            master_str: py_string_escape(&answers.master),
            copyright,
            author_texescaped,
            project_doc,
            project_doc_texescaped,
        }
    }
}

/// Heading underline matching the title's length in characters
pub fn underline(title: &str) -> String {
    "=".repeat(title.chars().count())
}
