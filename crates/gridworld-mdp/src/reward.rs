use std::collections::HashSet;

use crate::{
    GridWorldError,
    error::Result,
    geometry::{Grid, Position},
    state::{Action, State},
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct RewardCell {
    position: Position,
    value: f64,
}

/// Reward table plus the boundary-bump penalty.
///
/// Positions holding a positive value are terminal-inducing: leaving them
/// always enters the sink. That set is fixed when the model is built.
#[derive(Debug, Clone)]
pub struct RewardModel {
    grid: Grid,
    cells: Vec<RewardCell>,
    terminal_cells: HashSet<Position>,
    boundary_penalty: f64,
}

impl RewardModel {
    /// Zip positions and values into a table. Lengths are checked by config validation.
    pub(crate) fn new(
        grid: Grid,
        positions: &[Position],
        values: &[f64],
        boundary_penalty: f64,
    ) -> Self {
        let cells: Vec<RewardCell> = positions
            .iter()
            .zip(values)
            .map(|(&position, &value)| RewardCell { position, value })
            .collect();

        let terminal_cells = cells
            .iter()
            .filter(|cell| cell.value > 0.0)
            .map(|cell| cell.position)
            .collect();

        RewardModel {
            grid,
            cells,
            terminal_cells,
            boundary_penalty,
        }
    }

    pub fn boundary_penalty(&self) -> f64 {
        self.boundary_penalty
    }

    /// Whether `position` holds a positive reward and therefore absorbs.
    pub fn is_terminal_cell(&self, position: Position) -> bool {
        self.terminal_cells.contains(&position)
    }

    /// Iterate over the terminal-inducing positions.
    pub fn terminal_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.terminal_cells.iter().copied()
    }

    /// Iterate the configured `(position, value)` entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = (Position, f64)> + '_ {
        self.cells.iter().map(|cell| (cell.position, cell.value))
    }

    /// Reward for the edge `state --action--> next_state`.
    ///
    /// The table is consulted for `state`, so a reward cell pays out on the
    /// step that leaves it. The boundary penalty applies when `next_state`
    /// is the attempted off-grid cell. `state` is not checked against the
    /// grid; an off-grid cell simply matches no table entry.
    pub fn reward(&self, state: State, _action: Action, next_state: State) -> f64 {
        let Some(position) = state.position() else {
            return 0.0;
        };

        let mut reward = self.position_reward(position);
        if next_state
            .position()
            .is_some_and(|next| !self.grid.contains(next))
        {
            reward += self.boundary_penalty;
        }
        reward
    }

    /// Reward of `state` alone, without transition context.
    ///
    /// Only meaningful when no boundary penalty is configured.
    pub fn state_reward(&self, state: State) -> Result<f64> {
        if self.boundary_penalty != 0.0 {
            return Err(GridWorldError::PenaltyRequiresTransition {
                penalty: self.boundary_penalty,
            });
        }
        Ok(state
            .position()
            .map_or(0.0, |position| self.position_reward(position)))
    }

    fn position_reward(&self, position: Position) -> f64 {
        self.cells
            .iter()
            .filter(|cell| cell.position == position)
            .map(|cell| cell.value)
            .sum()
    }
}
