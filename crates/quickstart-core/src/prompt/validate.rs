//! Input validators used by the prompt loop
//!
//! Each validator is a pure function from the raw answer to the accepted
//! value, or a [`ValidationError`] carrying the message shown to the user.

use std::path::Path;
use thiserror::Error;

/// Rejection reason shown before the question is asked again
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type Validation<T> = Result<T, ValidationError>;

/// Reject a path that exists but is not a directory
pub fn is_path(x: &str) -> Validation<String> {
    let path = Path::new(x);
    if path.exists() && !path.is_dir() {
        return Err(ValidationError::new("Please enter a valid path name."));
    }
    Ok(x.to_string())
}

pub fn nonempty(x: &str) -> Validation<String> {
    if x.is_empty() {
        return Err(ValidationError::new("Please enter some text."));
    }
    Ok(x.to_string())
}

/// Build a validator accepting only the given values
pub fn choice(allowed: &'static [&'static str]) -> impl Fn(&str) -> Validation<String> {
    move |x| {
        if !allowed.iter().any(|a| *a == x) {
            return Err(ValidationError(format!(
                "Please enter one of {}.",
                allowed.join(", ")
            )));
        }
        Ok(x.to_string())
    }
}

/// Case-insensitive y/yes/n/no
pub fn boolean(x: &str) -> Validation<bool> {
    match x.to_ascii_uppercase().as_str() {
        "Y" | "YES" => Ok(true),
        "N" | "NO" => Ok(false),
        _ => Err(ValidationError::new("Please enter either 'y' or 'n'.")),
    }
}

/// A file suffix: a leading dot followed by at least one character
pub fn suffix(x: &str) -> Validation<String> {
    if !(x.starts_with('.') && x.chars().count() > 1) {
        return Err(ValidationError::new(
            "Please enter a file suffix, e.g. '.rst' or '.txt'.",
        ));
    }
    Ok(x.to_string())
}

pub fn ok(x: &str) -> Validation<String> {
    Ok(x.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_accepts_yes_no_forms() {
        for yes in ["y", "Y", "yes", "YES", "Yes", "yEs"] {
            assert_eq!(boolean(yes), Ok(true), "{}", yes);
        }
        for no in ["n", "N", "no", "NO", "No"] {
            assert_eq!(boolean(no), Ok(false), "{}", no);
        }
    }

    #[test]
    fn test_boolean_rejects_everything_else() {
        for bad in ["", "ye", "true", "1", "nope", " y"] {
            let err = boolean(bad).unwrap_err();
            assert_eq!(err.to_string(), "Please enter either 'y' or 'n'.");
        }
    }

    #[test]
    fn test_suffix() {
        assert_eq!(suffix(".rst").unwrap(), ".rst");
        assert_eq!(suffix(".txt").unwrap(), ".txt");
        assert!(suffix("rst").is_err());
        assert!(suffix(".").is_err());
        assert!(suffix("").is_err());
    }

    #[test]
    fn test_nonempty() {
        assert_eq!(nonempty("Demo").unwrap(), "Demo");
        assert_eq!(
            nonempty("").unwrap_err().to_string(),
            "Please enter some text."
        );
    }

    #[test]
    fn test_choice() {
        let paper = choice(&["a4", "letter"]);
        assert_eq!(paper("a4").unwrap(), "a4");
        assert_eq!(
            paper("legal").unwrap_err().to_string(),
            "Please enter one of a4, letter."
        );
    }

    #[test]
    fn test_is_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("conf.py");
        std::fs::write(&file, "").unwrap();

        let dir_str = dir.path().to_str().unwrap();
        assert_eq!(is_path(dir_str).unwrap(), dir_str);
        assert!(is_path(file.to_str().unwrap()).is_err());

        // Missing paths are fine, they get created later
        let missing = dir.path().join("docs");
        assert!(is_path(missing.to_str().unwrap()).is_ok());
        assert!(is_path("").is_ok());
    }

    #[test]
    fn test_ok_accepts_anything() {
        assert_eq!(ok("").unwrap(), "");
        assert_eq!(ok(".").unwrap(), ".");
    }
}
