//! Optional answers file that pre-fills prompt defaults
//!
//! ```yaml
//! project: Demo
//! author: A
//! version: "1.0"
//! extensions: [autodoc, intersphinx]
//! makefile: true
//! ```
//!
//! Values only change what is offered in brackets; every answer still goes
//! through its prompt and validator.

use crate::error::{QuickstartError, Result};
use crate::session::Extension;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnswerDefaults {
    pub path: Option<String>,
    pub sep: Option<bool>,
    pub dot: Option<String>,
    pub project: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub release: Option<String>,
    pub suffix: Option<String>,
    pub master: Option<String>,
    /// Extensions to offer as enabled; all others default to no
    pub extensions: Option<Vec<Extension>>,
    pub makefile: Option<bool>,
    pub batchfile: Option<bool>,
}

impl AnswerDefaults {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| QuickstartError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content).map_err(|e| QuickstartError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Default answer for an extension question
    pub fn extension(&self, ext: Extension) -> bool {
        self.extensions
            .as_ref()
            .is_some_and(|list| list.contains(&ext))
    }
}

/// Render a boolean as the default shown in a y/n prompt
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "y"
    } else {
        "n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers_file() {
        let defaults = AnswerDefaults::from_yaml(
            "project: Demo\nversion: \"1.0\"\nsep: true\nextensions: [autodoc, jsmath]\n",
        )
        .unwrap();
        assert_eq!(defaults.project.as_deref(), Some("Demo"));
        assert_eq!(defaults.version.as_deref(), Some("1.0"));
        assert_eq!(defaults.sep, Some(true));
        assert!(defaults.extension(Extension::Autodoc));
        assert!(defaults.extension(Extension::Jsmath));
        assert!(!defaults.extension(Extension::Todo));
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        assert_eq!(AnswerDefaults::from_yaml("").unwrap(), AnswerDefaults::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(AnswerDefaults::from_yaml("projcet: Demo\n").is_err());
        assert!(AnswerDefaults::from_yaml("extensions: [mathjax]\n").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.yaml");
        std::fs::write(&path, "sep: maybe\n").unwrap();

        let err = AnswerDefaults::load(&path).unwrap_err();
        assert!(matches!(err, QuickstartError::Config { .. }));
        assert!(err.to_string().contains("answers.yaml"));
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "y");
        assert_eq!(yes_no(false), "n");
    }
}
