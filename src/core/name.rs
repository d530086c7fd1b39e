//! Name validation shared by every named type in the crate.
//!
//! States, events, and machines are all identified by name, and names are
//! used as map keys throughout the engine, so every constructor that
//! accepts one funnels it through [`validated`] first.

use thiserror::Error;

/// Errors produced when validating a name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("a non-empty value is required for a name")]
    Empty,

    #[error("the name '{0}' must not start or end with whitespace")]
    EdgeWhitespace(String),
}

/// Validate a name for a state, event, or machine.
///
/// A valid name is non-empty, not whitespace-only, and carries no leading
/// or trailing whitespace. On success the name is returned unchanged.
///
/// # Example
///
/// ```rust
/// use automat::core::name::{validated, NameError};
///
/// assert_eq!(validated("OpeningDoor").unwrap(), "OpeningDoor");
/// assert_eq!(validated("   "), Err(NameError::Empty));
/// assert!(matches!(validated(" x"), Err(NameError::EdgeWhitespace(_))));
/// ```
pub fn validated(name: impl Into<String>) -> Result<String, NameError> {
    let name = name.into();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if trimmed != name {
        return Err(NameError::EdgeWhitespace(name));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass_through_unchanged() {
        for name in ["Turnstile", "OpeningDoor", "a", "two words", "with.dots"] {
            assert_eq!(validated(name).unwrap(), name);
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(validated(""), Err(NameError::Empty));
    }

    #[test]
    fn whitespace_only_names_are_rejected_as_empty() {
        for name in [" ", "   ", "\t", "\n", " \t\n "] {
            assert_eq!(validated(name), Err(NameError::Empty), "name: {name:?}");
        }
    }

    #[test]
    fn boundary_whitespace_is_rejected_distinctly() {
        for name in ["x ", " x", " x ", "\tx", "x\n"] {
            assert_eq!(
                validated(name),
                Err(NameError::EdgeWhitespace(name.to_string())),
                "name: {name:?}"
            );
        }
    }

    #[test]
    fn interior_whitespace_is_allowed() {
        assert_eq!(validated("Door Manager").unwrap(), "Door Manager");
    }

    #[test]
    fn error_messages_are_distinguishable() {
        let empty = validated(" ").unwrap_err().to_string();
        let edge = validated(" x").unwrap_err().to_string();
        assert!(empty.contains("non-empty"));
        assert!(edge.contains("whitespace"));
        assert_ne!(empty, edge);
    }
}
