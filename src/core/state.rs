//! States, their entry actions, and the seam actions use to raise events.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::core::event::Event;
use crate::core::name::{self, NameError};
use crate::core::transition::Transition;

/// Errors produced when mutating a state's transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("duplicate event name '{event}' used to create a transition from state '{state}'")]
    DuplicateTransition { event: String, state: String },
}

/// Handle passed to entry actions so they can raise follow-up events.
///
/// A sink is only ever lent to an action while the engine's drain loop is
/// running, so a raise can do nothing but append to the live queue; the
/// drain that invoked the action picks the event up in order. That is why
/// [`raise`](EventSink::raise) is infallible where
/// [`Machine::raise_event`](crate::Machine::raise_event) is not.
pub trait EventSink {
    /// Queue an event for the active dispatch loop.
    fn raise(&self, event: Event);
}

/// The behavior executed each time the machine enters a state.
pub type EntryAction = Arc<dyn Fn(&dyn EventSink) + Send + Sync>;

/// A named node in the machine.
///
/// A state owns an on-entry action, run once per transition into the
/// state, and a table of outgoing transitions keyed by event name. The
/// table holds at most one transition per event.
///
/// States are built fully, then handed to the machine; the machine keys
/// them by name, which must be unique within one machine.
///
/// # Example
///
/// ```rust
/// use automat::{Event, EventSink, State};
///
/// let closed = Event::new("DoorClosed").unwrap();
///
/// let opening = State::with_on_enter("OpeningDoor", |_fsm: &dyn EventSink| {
///     // open the door hardware here
/// })
/// .unwrap();
///
/// let mut closing = State::new("ClosingDoor").unwrap();
/// closing.transition_to(closed, &opening).unwrap();
/// assert_eq!(closing.transition_count(), 1);
/// ```
pub struct State {
    name: String,
    on_enter: Option<EntryAction>,
    transitions: HashMap<String, Transition>,
}

impl State {
    /// Create a state with the given name and no entry action yet.
    ///
    /// An action must be attached with [`set_on_enter`](State::set_on_enter)
    /// before the machine is started; `start` refuses to run a machine
    /// containing an action-less state.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        Ok(Self {
            name: name::validated(name)?,
            on_enter: None,
            transitions: HashMap::new(),
        })
    }

    /// Create a state with the given name and entry action.
    pub fn with_on_enter<F>(name: impl Into<String>, action: F) -> Result<Self, NameError>
    where
        F: Fn(&dyn EventSink) + Send + Sync + 'static,
    {
        let mut state = Self::new(name)?;
        state.set_on_enter(action);
        Ok(state)
    }

    /// Build a state from a reserved internal identifier, bypassing name
    /// validation. The caller guarantees the name is well formed.
    pub(crate) fn reserved(name: &str) -> Self {
        Self {
            name: name.to_string(),
            on_enter: None,
            transitions: HashMap::new(),
        }
    }

    /// The name of this state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach or replace the entry action.
    pub fn set_on_enter<F>(&mut self, action: F)
    where
        F: Fn(&dyn EventSink) + Send + Sync + 'static,
    {
        self.on_enter = Some(Arc::new(action));
    }

    /// The entry action, if one has been attached.
    pub fn on_enter(&self) -> Option<&EntryAction> {
        self.on_enter.as_ref()
    }

    /// Add a transition built from an event and a destination state.
    ///
    /// Convenience over [`add_transition`](State::add_transition).
    pub fn transition_to(&mut self, via_event: Event, to_state: &State) -> Result<(), StateError> {
        self.add_transition(Transition::new(via_event, to_state))
    }

    /// Add a transition to the table of transitions out of this state.
    ///
    /// Fails with [`StateError::DuplicateTransition`] if a transition for
    /// the same event name already exists; the existing transition is left
    /// intact.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), StateError> {
        let key = transition.via_event().name().to_string();
        if self.transitions.contains_key(&key) {
            return Err(StateError::DuplicateTransition {
                event: key,
                state: self.name.clone(),
            });
        }
        self.transitions.insert(key, transition);
        Ok(())
    }

    /// Look up the transition triggered by the named event, if any.
    pub fn transition(&self, event_name: &str) -> Option<&Transition> {
        self.transitions.get(event_name)
    }

    /// Iterate over the transitions out of this state, in no particular
    /// order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.values()
    }

    /// The number of transitions out of this state.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut events: Vec<&str> = self.transitions.keys().map(String::as_str).collect();
        events.sort_unstable();
        f.debug_struct("State")
            .field("name", &self.name)
            .field("on_enter", &self.on_enter.as_ref().map(|_| "…"))
            .field("transitions", &events)
            .finish()
    }
}
