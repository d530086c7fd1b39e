//! Property-based tests for names, events, and registration.
//!
//! These use proptest to verify the construction and registration
//! invariants hold across many generated inputs.

use automat::{Engine, Event, NameError, State, Transition};
use proptest::prelude::*;

prop_compose! {
    // Names with no whitespace anywhere, one or more characters.
    fn arbitrary_name()(name in "[A-Za-z][A-Za-z0-9_.]{0,24}") -> String {
        name
    }
}

proptest! {
    #[test]
    fn valid_names_construct_events_exactly(name in arbitrary_name()) {
        let event = Event::new(name.clone()).unwrap();
        prop_assert_eq!(event.name(), name.as_str());
    }

    #[test]
    fn valid_names_construct_states_exactly(name in arbitrary_name()) {
        let state = State::new(name.clone()).unwrap();
        prop_assert_eq!(state.name(), name.as_str());
    }

    #[test]
    fn leading_whitespace_is_always_rejected(name in arbitrary_name(), pad in 1..3usize) {
        let padded = format!("{}{}", " ".repeat(pad), name);
        prop_assert!(matches!(
            Event::new(padded).unwrap_err(),
            NameError::EdgeWhitespace(_)
        ));
    }

    #[test]
    fn trailing_whitespace_is_always_rejected(name in arbitrary_name(), pad in 1..3usize) {
        let padded = format!("{}{}", name, " ".repeat(pad));
        prop_assert!(matches!(
            Event::new(padded).unwrap_err(),
            NameError::EdgeWhitespace(_)
        ));
    }

    #[test]
    fn whitespace_only_names_are_rejected_as_empty(pad in 0..5usize) {
        prop_assert_eq!(Event::new(" ".repeat(pad)).unwrap_err(), NameError::Empty);
    }

    #[test]
    fn duplicate_transitions_never_accumulate(name in arbitrary_name(), attempts in 1..5usize) {
        let event = Event::new(name).unwrap();
        let mut state = State::new("Source").unwrap();
        state
            .add_transition(Transition::to_named(event.clone(), "First"))
            .unwrap();

        for _ in 0..attempts {
            prop_assert!(state
                .add_transition(Transition::to_named(event.clone(), "Another"))
                .is_err());
        }

        prop_assert_eq!(state.transition_count(), 1);
        prop_assert_eq!(state.transition(event.name()).unwrap().to_state(), "First");
    }

    #[test]
    fn registration_count_matches_distinct_names(
        names in prop::collection::hash_set("[A-Za-z]{1,12}", 1..8)
    ) {
        let engine = Engine::new("PropertyRig").unwrap();
        for name in &names {
            engine
                .add_state(State::with_on_enter(name.clone(), |_| {}).unwrap())
                .unwrap();
        }

        prop_assert_eq!(engine.state_count(), names.len());
        for name in &names {
            prop_assert!(engine.has_state(name));
        }
    }

    #[test]
    fn event_serde_round_trip(name in arbitrary_name()) {
        let event = Event::new(name).unwrap();
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, event);
    }
}
