//! Dispatch-level errors.

use thiserror::Error;

/// Errors surfaced by engine and machine operations.
///
/// Every kind is an immediate, synchronous failure: nothing is retried or
/// queued, and each propagates straight to the caller of the operation
/// that triggered it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// A state of this name is already registered.
    #[error("attempt to add a duplicate state '{0}'")]
    DuplicateState(String),

    /// A referenced state has not been registered with the machine.
    #[error("the state '{0}' has not been added to the state machine")]
    UnknownState(String),

    /// A registered state has no entry action at start time.
    #[error("the state '{0}' does not have an on-enter action")]
    MissingAction(String),

    /// The current state has no transition for a dequeued event. Raised
    /// mid-drain; the machine is left in an inconsistent position and the
    /// caller should treat the configuration as fatally wrong.
    #[error("failed to find a transition for event '{event}' from state '{state}'")]
    NoTransition { event: String, state: String },
}
