use thiserror::Error;

use crate::state::Action;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GridWorldError>;

#[derive(Debug, Error)]
/// Error type for grid world configuration, queries, and tabular export.
pub enum GridWorldError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("tprob must lie in [0, 1], got {value}")]
    InvalidTransitionProbability { value: f64 },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("grid of {width}x{height} cells cannot be indexed")]
    GridTooLarge { width: u32, height: u32 },

    #[error("reward table has {positions} positions but {values} values")]
    RewardTableMismatch { positions: usize, values: usize },

    #[error("{name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("discount must lie in [0, 1], got {value}")]
    InvalidDiscount { value: f64 },

    #[error("state-only reward requires a zero boundary penalty, got {penalty}")]
    PenaltyRequiresTransition { penalty: f64 },

    #[error("state ({x}, {y}) lies outside the {width}x{height} grid")]
    StateOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("action index {index} is not one of the {count} actions")]
    InvalidActionIndex { index: usize, count: usize },

    #[error("state index {index} is outside 1..={count}")]
    UnknownStateIndex { index: usize, count: usize },

    #[error(
        "probability sum for state {state}, action {action:?} must be within {tolerance} of 1.0, got {sum}"
    )]
    ProbabilitySum {
        state: usize,
        action: Action,
        sum: f64,
        tolerance: f64,
    },
}
