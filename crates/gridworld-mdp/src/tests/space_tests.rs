use std::collections::HashSet;

use crate::{
    GridWorld, GridWorldConfig, GridWorldError,
    state::{Action, State},
};

#[test]
fn indices_cover_one_through_cells_plus_one() {
    let world = GridWorld::default();
    let indices: Vec<usize> = world
        .all_states()
        .map(|s| world.state_index(s).expect("enumerated state").get())
        .collect();

    assert_eq!(indices, (1..=101).collect::<Vec<_>>());
    assert_eq!(world.state_count(), 101);
}

#[test]
fn x_varies_fastest_and_sink_is_last() {
    let world = GridWorld::new(GridWorldConfig::default().with_size(3, 2))
        .expect("config should be valid");
    let states: Vec<State> = world.all_states().collect();

    assert_eq!(
        states,
        vec![
            State::at(1, 1),
            State::at(2, 1),
            State::at(3, 1),
            State::at(1, 2),
            State::at(2, 2),
            State::at(3, 2),
            State::Terminal,
        ]
    );
    assert_eq!(world.state_index(State::at(1, 2)).expect("valid").get(), 4);
    assert_eq!(world.state_index(State::Terminal).expect("valid").get(), 7);
    assert_eq!(world.state_index(State::Terminal).expect("valid").offset(), 6);
}

#[test]
fn index_lookup_round_trips_through_enumeration() {
    let world = GridWorld::default();
    let states: Vec<State> = world.all_states().collect();

    for state in &states {
        let index = world.state_index(*state).expect("enumerated state");
        assert_eq!(states[index.offset()], *state);
        assert_eq!(world.state_at(index.get()).expect("valid index"), *state);
    }

    let unique: HashSet<State> = states.iter().copied().collect();
    assert_eq!(unique.len(), states.len());
}

#[test]
fn invalid_indices_and_states_are_rejected() {
    let world = GridWorld::default();

    assert!(matches!(
        world.state_at(0),
        Err(GridWorldError::UnknownStateIndex { index: 0, count: 101 })
    ));
    assert!(matches!(
        world.state_at(102),
        Err(GridWorldError::UnknownStateIndex { index: 102, .. })
    ));
    assert!(matches!(
        world.state_index(State::at(11, 1)),
        Err(GridWorldError::StateOutOfBounds { x: 11, y: 1, .. })
    ));
}

#[test]
fn actions_have_a_stable_order() {
    let world = GridWorld::default();

    assert_eq!(
        world.all_actions(),
        [Action::Up, Action::Down, Action::Left, Action::Right]
    );
    for (i, action) in world.all_actions().into_iter().enumerate() {
        assert_eq!(world.action_index(action), i);
        assert_eq!(Action::from_index(i).expect("valid index"), action);
    }
    assert!(matches!(
        Action::from_index(4),
        Err(GridWorldError::InvalidActionIndex { index: 4, count: 4 })
    ));
}

#[test]
fn terminal_states_compare_equal_and_never_match_cells() {
    let mut seen = HashSet::new();
    seen.insert(State::Terminal);
    seen.insert(State::Terminal);
    seen.insert(State::at(1, 1));

    assert_eq!(seen.len(), 2);
    assert_ne!(State::Terminal, State::at(0, 0));
    assert!(State::Terminal.is_terminal());
    assert!(!State::at(3, 3).is_terminal());
}

#[test]
fn feature_vectors_round_trip() {
    for state in [State::at(3, 7), State::Terminal] {
        assert_eq!(State::from_features(state.to_features()), state);
    }
    assert_eq!(State::at(3, 7).to_features(), [3.0, 7.0, 0.0]);
}
