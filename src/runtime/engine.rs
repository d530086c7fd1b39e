//! The event-dispatch core of the machine.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info};

use crate::core::name::{self, NameError};
use crate::core::{Event, EventSink, State, Transition};
use crate::runtime::error::MachineError;

/// Reserved name of the state every machine is placed in by
/// [`Engine::start`] before the first transition fires.
pub const START_STATE_NAME: &str = "automat.internal.StartState";

/// Reserved name of the event [`Engine::start`] raises to move the
/// machine from the start state into the caller's initial state.
pub const START_EVENT_NAME: &str = "automat.internal.StartEvent";

/// Pending events plus the flag marking an active drain. Both live behind
/// one mutex so the check-and-set of the flag is atomic with the enqueue.
#[derive(Debug)]
struct DispatchQueue {
    pending: VecDeque<Event>,
    dispatching: bool,
}

/// No lock is ever held while user code runs, so a poisoned guard still
/// holds consistent data; recover it instead of propagating the panic.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sink lent to an entry action for the duration of one invocation.
///
/// The drain that invoked the action owns the queue, so raising through
/// the sink only appends; no second drain can start underneath the first.
struct DispatchSink<'a> {
    engine: &'a Engine,
}

impl EventSink for DispatchSink<'_> {
    fn raise(&self, event: Event) {
        info!("raise_event: [{}]", event.name());
        self.engine.enqueue(event);
    }
}

/// The engine owns the registered states, the current state, and the
/// pending-event queue, and implements the dispatch loop that drains the
/// queue, looks up transitions, and invokes entry actions.
///
/// [`Machine`](crate::Machine) is the consumer-facing facade; the engine
/// is public so the dispatch machinery can be driven and inspected
/// directly, above all from tests.
///
/// All calls are expected to originate from one caller context at a time.
/// The queue mutex keeps enqueueing safe, but the only re-entrancy the
/// engine is designed for is entry actions raising events from within the
/// drain that invoked them.
#[derive(Debug)]
pub struct Engine {
    name: String,
    states: Mutex<HashMap<String, State>>,
    current: Mutex<Option<String>>,
    dispatch: Mutex<DispatchQueue>,
}

impl Engine {
    /// Create an engine with the given name and no registered states.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        Ok(Self {
            name: name::validated(name)?,
            states: Mutex::new(HashMap::new()),
            current: Mutex::new(None),
            dispatch: Mutex::new(DispatchQueue {
                pending: VecDeque::new(),
                dispatching: false,
            }),
        })
    }

    /// The name of this engine.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a state with the machine.
    ///
    /// Fails with [`MachineError::DuplicateState`] if a state of the same
    /// name is already registered. Registration consumes the state; from
    /// here on it is addressed by name.
    pub fn add_state(&self, state: State) -> Result<(), MachineError> {
        let mut states = lock(&self.states);
        if states.contains_key(state.name()) {
            return Err(MachineError::DuplicateState(state.name().to_string()));
        }
        info!("add_state: [{}]", state.name());
        states.insert(state.name().to_string(), state);
        Ok(())
    }

    /// The number of registered states. After a successful
    /// [`start`](Engine::start) this includes the synthesized start state.
    pub fn state_count(&self) -> usize {
        lock(&self.states).len()
    }

    /// Whether a state of the given name is registered.
    pub fn has_state(&self, name: &str) -> bool {
        lock(&self.states).contains_key(name)
    }

    /// The number of transitions out of the named state, or `None` if no
    /// such state is registered.
    pub fn transition_count(&self, state_name: &str) -> Option<usize> {
        lock(&self.states).get(state_name).map(State::transition_count)
    }

    /// The name of the current state; `None` until the machine is started.
    pub fn current_state(&self) -> Option<String> {
        lock(&self.current).clone()
    }

    /// The number of events raised and not yet dispatched.
    pub fn pending_events(&self) -> usize {
        lock(&self.dispatch).pending.len()
    }

    /// Set the current state, resolving the name against the registered
    /// states.
    ///
    /// Fails with [`MachineError::UnknownState`] if no state of that name
    /// has been registered; a same-named state that was never added does
    /// not count.
    pub fn set_current_state(&self, name: &str) -> Result<(), MachineError> {
        if !lock(&self.states).contains_key(name) {
            return Err(MachineError::UnknownState(name.to_string()));
        }
        *lock(&self.current) = Some(name.to_string());
        info!("set_current_state: changed to [{name}]");
        Ok(())
    }

    /// Start the machine in the named initial state.
    ///
    /// Every state diagram has a start state with a single transition to
    /// some initial state via a start event, and starting reproduces that
    /// picture in two phases:
    ///
    /// 1. a validation pass over every registered state: each must carry
    ///    an entry action ([`MachineError::MissingAction`]), every
    ///    transition destination must be registered, and so must the
    ///    initial state itself ([`MachineError::UnknownState`]);
    /// 2. the reserved start state ([`START_STATE_NAME`], with a no-op
    ///    entry action) is registered through the ordinary
    ///    [`add_state`](Engine::add_state), given a single transition to
    ///    `initial` via the reserved start event, made current, and the
    ///    start event is raised.
    ///
    /// Raising the start event runs the dispatch loop, so by the time
    /// `start` returns the machine sits in `initial` with its entry
    /// action, and transitively anything that action raised, already
    /// executed. The start state stays registered afterwards.
    pub fn start(&self, initial: &str) -> Result<(), MachineError> {
        debug!("start: [{initial}]");
        {
            let states = lock(&self.states);
            if !states.contains_key(initial) {
                return Err(MachineError::UnknownState(initial.to_string()));
            }
            for state in states.values() {
                if state.on_enter().is_none() {
                    return Err(MachineError::MissingAction(state.name().to_string()));
                }
                for transition in state.transitions() {
                    if !states.contains_key(transition.to_state()) {
                        return Err(MachineError::UnknownState(
                            transition.to_state().to_string(),
                        ));
                    }
                }
            }
        }

        let start_event = Event::reserved(START_EVENT_NAME);
        let mut start_state = State::reserved(START_STATE_NAME);
        start_state.set_on_enter(|_| {});
        start_state
            .add_transition(Transition::to_named(start_event.clone(), initial))
            .expect("fresh start state has no transitions yet");

        self.add_state(start_state)?;
        self.set_current_state(START_STATE_NAME)?;
        self.raise_event(start_event)
    }

    /// Raise an event in the machine.
    ///
    /// The event is always enqueued. If a drain is already in progress
    /// the call returns immediately and the in-progress drain picks the
    /// event up in raise order; otherwise this call takes ownership of
    /// the drain and runs
    /// [`handle_pending_events`](Engine::handle_pending_events) to
    /// completion before returning. One logical drain owns the queue at a
    /// time, which keeps FIFO order even when entry actions raise new
    /// events mid-drain.
    ///
    /// A dispatch failure aborts the drain and is returned here. The
    /// machine is then in a mid-failure position: later events stay
    /// queued undrained and the drain stays marked active, so treat the
    /// error as a fatal configuration bug rather than something to
    /// recover from.
    pub fn raise_event(&self, event: Event) -> Result<(), MachineError> {
        info!("raise_event: [{}]", event.name());
        if !self.enqueue(event) {
            // the drain already active on this call stack picks it up
            return Ok(());
        }
        self.handle_pending_events()?;
        lock(&self.dispatch).dispatching = false;
        Ok(())
    }

    /// Append an event to the queue. Returns true when the caller has
    /// taken ownership of the drain and must run it.
    fn enqueue(&self, event: Event) -> bool {
        let mut dispatch = lock(&self.dispatch);
        debug!(
            "enqueue: [{}] dispatching={} pending={}",
            event.name(),
            dispatch.dispatching,
            dispatch.pending.len()
        );
        dispatch.pending.push_back(event);
        if dispatch.dispatching {
            false
        } else {
            dispatch.dispatching = true;
            true
        }
    }

    /// Drain the pending-event queue.
    ///
    /// For each event, in raise order: look up the transition for the
    /// event in the current state, fail with
    /// [`MachineError::NoTransition`] if there is none, otherwise move to
    /// the destination and run its entry action. Actions run with no lock
    /// held; events they raise land on the same queue and are handled by
    /// this same loop before it returns.
    ///
    /// Events raised before the machine is started stay queued, since
    /// with no current state there is nothing to dispatch against.
    ///
    /// Normally driven by [`raise_event`](Engine::raise_event).
    pub fn handle_pending_events(&self) -> Result<(), MachineError> {
        loop {
            let Some(current_name) = lock(&self.current).clone() else {
                return Ok(());
            };
            let Some(event) = lock(&self.dispatch).pending.pop_front() else {
                return Ok(());
            };
            let destination = {
                let states = lock(&self.states);
                let Some(current) = states.get(&current_name) else {
                    return Err(MachineError::UnknownState(current_name));
                };
                match current.transition(event.name()) {
                    Some(transition) => transition.to_state().to_string(),
                    None => {
                        return Err(MachineError::NoTransition {
                            event: event.name().to_string(),
                            state: current_name,
                        });
                    }
                }
            };
            debug!(
                "handle_pending_events: {current_name} --[{}]--> {destination}",
                event.name()
            );
            self.set_current_state(&destination)?;
            let action = lock(&self.states)
                .get(&destination)
                .and_then(|state| state.on_enter().cloned());
            if let Some(action) = action {
                action(&DispatchSink { engine: self });
            }
        }
    }
}
