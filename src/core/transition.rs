//! The directed edge between two states.

use crate::core::event::Event;
use crate::core::state::State;

/// A pairing of a triggering event with a destination state.
///
/// The destination is recorded by name: the engine resolves it against its
/// registered states when the transition fires, and `start` verifies up
/// front that every destination resolves. Holding the name rather than the
/// state object keeps transitions cheap to clone and sidesteps shared
/// ownership of mutable states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    via_event: Event,
    to_state: String,
}

impl Transition {
    /// Create a transition to a known destination state via an event.
    pub fn new(via_event: Event, to_state: &State) -> Self {
        Self::to_named(via_event, to_state.name())
    }

    /// Create a transition whose destination is given by name.
    ///
    /// Useful when the destination state object has already been handed to
    /// the machine; the name is all the engine needs to resolve it.
    pub fn to_named(via_event: Event, to_state: impl Into<String>) -> Self {
        Self {
            via_event,
            to_state: to_state.into(),
        }
    }

    /// The event that causes this transition to occur.
    pub fn via_event(&self) -> &Event {
        &self.via_event
    }

    /// The name of the state the machine moves to when this transition
    /// fires.
    pub fn to_state(&self) -> &str {
        &self.to_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_records_the_destination_by_name() {
        let opened = Event::new("DoorOpened").unwrap();
        let closing = State::new("ClosingDoor").unwrap();

        let transition = Transition::new(opened.clone(), &closing);

        assert_eq!(transition.via_event(), &opened);
        assert_eq!(transition.to_state(), "ClosingDoor");
    }

    #[test]
    fn to_named_takes_a_bare_name() {
        let failed = Event::new("ActionFailed").unwrap();
        let transition = Transition::to_named(failed.clone(), "Stopping");

        assert_eq!(transition.via_event().name(), "ActionFailed");
        assert_eq!(transition.to_state(), "Stopping");
    }
}
