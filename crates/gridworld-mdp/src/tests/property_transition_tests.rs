use proptest::prelude::*;

use crate::{
    GridWorld, GridWorldConfig,
    state::{Action, State},
};

fn world_strategy() -> impl Strategy<Value = (GridWorld, i32, i32)> {
    (1u32..8, 1u32..8, 0.0f64..=1.0).prop_flat_map(|(width, height, tprob)| {
        (1..=width as i32, 1..=height as i32).prop_map(move |(x, y)| {
            let world = GridWorld::new(
                GridWorldConfig::default()
                    .with_size(width, height)
                    .without_rewards()
                    .with_tprob(tprob),
            )
            .expect("generated config should be valid");
            (world, x, y)
        })
    })
}

proptest! {
    #[test]
    fn every_distribution_has_unit_mass_on_grid((world, x, y) in world_strategy(), action_id in 0usize..4) {
        let action = Action::from_index(action_id).expect("valid index");
        let dist = world.transition(State::at(x, y), action).expect("in-bounds query");

        prop_assert!((dist.total() - 1.0).abs() < 1e-9);
        for (state, p) in dist.iter() {
            prop_assert!(p >= 0.0);
            if p > 0.0 {
                let position = state.position().expect("open grid never absorbs");
                prop_assert!(world.in_bounds(position.x, position.y));
            }
        }
    }

    #[test]
    fn intended_direction_keeps_tprob_when_open((world, x, y) in world_strategy(), action_id in 0usize..4) {
        let action = Action::from_index(action_id).expect("valid index");
        let target = world
            .attempted_destination(State::at(x, y), action)
            .expect("in-bounds query");
        let position = target.position().expect("cell target");
        prop_assume!(world.in_bounds(position.x, position.y));

        let dist = world.transition(State::at(x, y), action).expect("in-bounds query");
        let tprob = world.config().tprob;
        let slot = dist
            .iter()
            .find(|(state, _)| *state == target)
            .map(|(_, p)| p)
            .expect("target slot present");
        prop_assert!((slot - tprob).abs() < 1e-12);
    }

    #[test]
    fn positive_reward_cells_always_absorb(width in 1u32..8, height in 1u32..8, value in 0.001f64..100.0, action_id in 0usize..4) {
        let world = GridWorld::new(
            GridWorldConfig::default()
                .with_size(width, height)
                .without_rewards()
                .with_reward(width as i32, height as i32, value),
        )
        .expect("generated config should be valid");
        let cell = State::at(width as i32, height as i32);
        let action = Action::from_index(action_id).expect("valid index");

        let dist = world.transition(cell, action).expect("in-bounds query");
        prop_assert_eq!(dist.probability_of(State::Terminal), 1.0);
        prop_assert_eq!(world.reward(cell, action, State::Terminal), value);
    }

    #[test]
    fn state_index_is_a_bijection(width in 1u32..12, height in 1u32..12) {
        let world = GridWorld::new(GridWorldConfig::default().with_size(width, height))
            .expect("generated config should be valid");
        let indices: Vec<usize> = world
            .all_states()
            .map(|s| world.state_index(s).expect("enumerated state").get())
            .collect();

        let expected: Vec<usize> = (1..=(width * height) as usize + 1).collect();
        prop_assert_eq!(indices, expected);
    }
}
