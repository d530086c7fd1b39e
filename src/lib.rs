//! Automat: a minimal event-driven finite state machine runtime.
//!
//! Declare named states, give each an on-entry action, wire transitions
//! between them keyed by named events, then start the machine and raise
//! events to drive it. The core is the dispatch engine: a re-entrant-safe
//! FIFO event queue, name-keyed transition lookup, and a startup sequence
//! that synthesizes a reserved start state so entering the initial state
//! is an ordinary transition like any other.
//!
//! Entry actions receive an [`EventSink`] and typically raise the next
//! event from inside the current dispatch; the active drain picks such
//! events up in raise order, so one logical loop always owns the queue.
//!
//! # Core Concepts
//!
//! - **State**: a named node with an entry action and outgoing transitions
//! - **Event**: a named trigger that may cause a transition
//! - **Transition**: an edge keyed by event name, resolved by state name
//! - **Machine**: the consumer facade over the dispatch [`Engine`]
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use automat::{Event, Machine, State};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opened = Event::new("DoorOpened")?;
//! let closed = Event::new("DoorClosed")?;
//! let failed = Event::new("ActionFailed")?;
//!
//! // Cycle the door ten times, then give up.
//! let counter = Arc::new(AtomicUsize::new(0));
//! let cycles = Arc::clone(&counter);
//! let raise_opened = opened.clone();
//! let raise_failed = failed.clone();
//! let mut opening = State::with_on_enter("OpeningDoor", move |fsm| {
//!     if cycles.fetch_add(1, Ordering::SeqCst) < 10 {
//!         fsm.raise(raise_opened.clone());
//!     } else {
//!         fsm.raise(raise_failed.clone());
//!     }
//! })?;
//!
//! let raise_closed = closed.clone();
//! let mut closing = State::with_on_enter("ClosingDoor", move |fsm| {
//!     fsm.raise(raise_closed.clone());
//! })?;
//!
//! // Stopping raises nothing, so the machine comes to rest here.
//! let stopping = State::with_on_enter("Stopping", |_| {})?;
//!
//! opening.transition_to(opened, &closing)?;
//! opening.transition_to(failed, &stopping)?;
//! closing.transition_to(closed, &opening)?;
//!
//! let machine = Machine::new("DoorManager")?;
//! machine.add_state(opening)?;
//! machine.add_state(closing)?;
//! machine.add_state(stopping)?;
//!
//! machine.start("OpeningDoor")?;
//!
//! assert_eq!(machine.engine().current_state().as_deref(), Some("Stopping"));
//! assert_eq!(machine.engine().pending_events(), 0);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod runtime;

// Re-export the consumer-facing surface
pub use crate::core::{EntryAction, Event, EventSink, NameError, State, StateError, Transition};
pub use crate::runtime::{Engine, Machine, MachineError};
