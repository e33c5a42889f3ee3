use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{GridWorldError, error::Result, geometry::Position};

const DEFAULT_GRIDWORLD_CONFIG_YAML: &str = include_str!("../config/gridworld.default.yaml");

/// Construction parameters for a grid world.
///
/// Rewards are given as two parallel lists so configuration files can state
/// positions and values side by side; both must have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridWorldConfig {
    pub width: u32,
    pub height: u32,
    pub reward_positions: Vec<Position>,
    pub reward_values: Vec<f64>,
    /// Added to the reward whenever a transition targets a cell off the grid.
    pub boundary_penalty: f64,
    /// Probability of moving in the intended direction when unobstructed.
    pub tprob: f64,
    pub discount: f64,
}

impl Default for GridWorldConfig {
    fn default() -> Self {
        GridWorldConfig {
            width: 10,
            height: 10,
            reward_positions: vec![
                Position::new(4, 3),
                Position::new(4, 6),
                Position::new(9, 3),
                Position::new(8, 8),
            ],
            reward_values: vec![-10.0, -5.0, 10.0, 3.0],
            boundary_penalty: -1.0,
            tprob: 0.7,
            discount: 0.95,
        }
    }
}

impl GridWorldConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: GridWorldConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_GRIDWORLD_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Replace the grid dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Drop every configured reward cell.
    pub fn without_rewards(mut self) -> Self {
        self.reward_positions.clear();
        self.reward_values.clear();
        self
    }

    /// Append one reward cell. Repeating a position accumulates its value.
    pub fn with_reward(mut self, x: i32, y: i32, value: f64) -> Self {
        self.reward_positions.push(Position::new(x, y));
        self.reward_values.push(value);
        self
    }

    pub fn with_tprob(mut self, tprob: f64) -> Self {
        self.tprob = tprob;
        self
    }

    pub fn with_boundary_penalty(mut self, penalty: f64) -> Self {
        self.boundary_penalty = penalty;
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Check every construction invariant, reporting the first that fails.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GridWorldError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        // Neighbour coordinates must stay representable as i32 and every
        // cell plus the sink must fit a dense index.
        let cells = (self.width as usize).checked_mul(self.height as usize);
        if self.width >= i32::MAX as u32
            || self.height >= i32::MAX as u32
            || cells.and_then(|n| n.checked_add(1)).is_none()
        {
            return Err(GridWorldError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }

        if self.reward_positions.len() != self.reward_values.len() {
            return Err(GridWorldError::RewardTableMismatch {
                positions: self.reward_positions.len(),
                values: self.reward_values.len(),
            });
        }

        if !(0.0..=1.0).contains(&self.tprob) {
            return Err(GridWorldError::InvalidTransitionProbability { value: self.tprob });
        }

        if !self.boundary_penalty.is_finite() {
            return Err(GridWorldError::NonFiniteParameter {
                name: "boundary_penalty",
                value: self.boundary_penalty,
            });
        }

        if !self.discount.is_finite() {
            return Err(GridWorldError::NonFiniteParameter {
                name: "discount",
                value: self.discount,
            });
        }
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(GridWorldError::InvalidDiscount {
                value: self.discount,
            });
        }

        if let Some(value) = self.reward_values.iter().copied().find(|v| !v.is_finite()) {
            return Err(GridWorldError::NonFiniteParameter {
                name: "reward value",
                value,
            });
        }

        Ok(())
    }
}
