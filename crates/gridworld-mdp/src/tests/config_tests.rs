use crate::{GridWorld, GridWorldConfig, GridWorldError, geometry::Position};

#[test]
fn default_yaml_matches_default_config() {
    let config = GridWorldConfig::from_default_yaml().expect("default yaml should parse");

    assert_eq!(config, GridWorldConfig::default());
    assert_eq!(config.reward_positions[2], Position::new(9, 3));
    assert_eq!(config.reward_values[2], 10.0);
}

#[test]
fn partial_yaml_falls_back_to_defaults() {
    let config = GridWorldConfig::from_yaml_str("width: 4\nheight: 3\ntprob: 0.8\n")
        .expect("partial yaml should parse");

    assert_eq!(config.width, 4);
    assert_eq!(config.height, 3);
    assert_eq!(config.tprob, 0.8);
    assert_eq!(config.discount, 0.95);
    assert_eq!(config.boundary_penalty, -1.0);
}

#[test]
fn invalid_tprob_is_rejected() {
    for tprob in [-0.1, 1.5, f64::NAN] {
        let err = GridWorld::new(GridWorldConfig::default().with_tprob(tprob))
            .expect_err("tprob outside [0, 1] should fail");
        assert!(matches!(
            err,
            GridWorldError::InvalidTransitionProbability { .. }
        ));
    }
}

#[test]
fn zero_sized_grid_is_rejected() {
    let err = GridWorld::new(GridWorldConfig::default().with_size(0, 5))
        .expect_err("zero width should fail");
    assert!(matches!(
        err,
        GridWorldError::InvalidDimensions {
            width: 0,
            height: 5
        }
    ));
}

#[test]
fn oversized_grid_is_rejected() {
    let err = GridWorld::new(GridWorldConfig::default().with_size(u32::MAX, 1))
        .expect_err("unrepresentable width should fail");
    assert!(matches!(err, GridWorldError::GridTooLarge { .. }));
}

#[test]
fn reward_table_lengths_must_match() {
    let mut config = GridWorldConfig::default();
    config.reward_values.pop();

    let err = GridWorld::new(config).expect_err("mismatched table should fail");
    assert!(matches!(
        err,
        GridWorldError::RewardTableMismatch {
            positions: 4,
            values: 3
        }
    ));
}

#[test]
fn non_finite_parameters_are_rejected() {
    let err = GridWorld::new(GridWorldConfig::default().with_boundary_penalty(f64::INFINITY))
        .expect_err("infinite penalty should fail");
    assert!(matches!(
        err,
        GridWorldError::NonFiniteParameter {
            name: "boundary_penalty",
            ..
        }
    ));

    let err = GridWorld::new(GridWorldConfig::default().with_reward(2, 2, f64::NAN))
        .expect_err("NaN reward should fail");
    assert!(matches!(err, GridWorldError::NonFiniteParameter { .. }));

    let err = GridWorld::new(GridWorldConfig::default().with_discount(1.5))
        .expect_err("discount above one should fail");
    assert!(matches!(err, GridWorldError::InvalidDiscount { .. }));
}

#[test]
fn default_world_uses_documented_parameters() {
    let world = GridWorld::default();

    assert_eq!(world.config(), &GridWorldConfig::default());
    assert_eq!(world.discount(), 0.95);
    assert_eq!(world.grid().width(), 10);
    assert_eq!(world.grid().height(), 10);
    assert!(world.in_bounds(1, 1));
    assert!(world.in_bounds(10, 10));
    assert!(!world.in_bounds(0, 10));
    assert!(!world.in_bounds(10, 11));
}
