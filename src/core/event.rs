//! The event token that drives transitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::name::{self, NameError};

/// A named token representing something that happened.
///
/// Raising an event against a machine is what causes it to move from the
/// current state to another. Events are value-like: identity is the name,
/// and an event is immutable after construction.
///
/// Serde support re-runs name validation on deserialization, so an
/// `Event` read back from storage carries the same invariants as one
/// built through [`Event::new`].
///
/// # Example
///
/// ```rust
/// use automat::Event;
///
/// let opened = Event::new("DoorOpened").unwrap();
/// assert_eq!(opened.name(), "DoorOpened");
///
/// assert!(Event::new("  ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Event {
    name: String,
}

impl Event {
    /// Create an event with the given name.
    ///
    /// Fails with [`NameError`] if the name is empty, whitespace-only, or
    /// starts/ends with whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        Ok(Self {
            name: name::validated(name)?,
        })
    }

    /// Build an event from a reserved internal identifier, bypassing
    /// validation. The caller guarantees the name is well formed.
    pub(crate) fn reserved(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The name of the event.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Event {
    type Error = NameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<Event> for String {
    fn from(event: Event) -> Self {
        event.name
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
