//! The consumer-facing state machine facade.

use crate::core::name::NameError;
use crate::core::{Event, State};
use crate::runtime::engine::Engine;
use crate::runtime::error::MachineError;

/// A named finite state machine.
///
/// `Machine` is a thin facade over [`Engine`]: declare states with
/// [`add_state`](Machine::add_state), start the machine in one of them,
/// then drive it by raising events. All behavior lives in the engine,
/// which [`engine`](Machine::engine) exposes for inspection.
///
/// # Example
///
/// ```rust
/// use automat::{Event, Machine, State};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let opened = Event::new("DoorOpened")?;
/// let closed = Event::new("DoorClosed")?;
///
/// let mut open = State::with_on_enter("Open", |_| {})?;
/// let mut shut = State::with_on_enter("Shut", |_| {})?;
/// open.transition_to(closed, &shut)?;
/// shut.transition_to(opened.clone(), &open)?;
///
/// let machine = Machine::new("DoorControl")?;
/// machine.add_state(open)?;
/// machine.add_state(shut)?;
///
/// machine.start("Shut")?;
/// machine.raise_event(opened)?;
/// assert_eq!(machine.engine().current_state().as_deref(), Some("Open"));
/// # Ok(())
/// # }
/// ```
pub struct Machine {
    engine: Engine,
}

impl Machine {
    /// Create a machine with the given name.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        Ok(Self {
            engine: Engine::new(name)?,
        })
    }

    /// The name of the machine.
    pub fn name(&self) -> &str {
        self.engine.name()
    }

    /// Register a state with the machine. See [`Engine::add_state`].
    pub fn add_state(&self, state: State) -> Result<(), MachineError> {
        self.engine.add_state(state)
    }

    /// Start the machine in the named initial state. See
    /// [`Engine::start`].
    pub fn start(&self, initial: &str) -> Result<(), MachineError> {
        self.engine.start(initial)
    }

    /// Raise an event in the machine. See [`Engine::raise_event`].
    pub fn raise_event(&self, event: Event) -> Result<(), MachineError> {
        self.engine.raise_event(event)
    }

    /// The underlying engine, exposed for inspection of dispatch state.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_the_name() {
        let machine = Machine::new("DoorManager").unwrap();
        assert_eq!(machine.name(), "DoorManager");

        assert_eq!(Machine::new("  ").unwrap_err(), NameError::Empty);
        assert!(matches!(
            Machine::new(" DoorManager"),
            Err(NameError::EdgeWhitespace(_))
        ));
    }

    #[test]
    fn facade_delegates_to_the_engine() {
        let machine = Machine::new("DoorManager").unwrap();
        machine
            .add_state(State::with_on_enter("Idle", |_| {}).unwrap())
            .unwrap();

        assert_eq!(machine.engine().state_count(), 1);
        assert!(machine.engine().has_state("Idle"));

        machine.start("Idle").unwrap();
        assert_eq!(machine.engine().current_state().as_deref(), Some("Idle"));
    }

    #[test]
    fn raise_event_is_dispatched_through_the_engine() {
        let machine = Machine::new("DoorManager").unwrap();
        let wake = Event::new("Wake").unwrap();

        let mut idle = State::with_on_enter("Idle", |_| {}).unwrap();
        let awake = State::with_on_enter("Awake", |_| {}).unwrap();
        idle.transition_to(wake.clone(), &awake).unwrap();

        machine.add_state(idle).unwrap();
        machine.add_state(awake).unwrap();
        machine.start("Idle").unwrap();

        machine.raise_event(wake).unwrap();
        assert_eq!(machine.engine().current_state().as_deref(), Some("Awake"));
        assert_eq!(machine.engine().pending_events(), 0);
    }
}
