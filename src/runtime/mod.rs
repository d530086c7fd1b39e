//! The imperative shell around the core types: event dispatch and the
//! machine facade.
//!
//! [`Engine`] owns the registered states, the current state, and the
//! re-entrant-safe pending-event queue; [`Machine`] is the thin facade
//! consumers hold. The engine runs on a single logical thread of control:
//! the one concurrency concern it handles is entry actions raising
//! events from within the drain loop that invoked them.

pub mod engine;
pub mod error;
pub mod machine;

pub use engine::{Engine, START_EVENT_NAME, START_STATE_NAME};
pub use error::MachineError;
pub use machine::Machine;
