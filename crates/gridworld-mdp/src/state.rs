use serde::{Deserialize, Serialize};

use crate::{GridWorldError, error::Result, geometry::Position};

/// A grid world state: either an agent cell or the single absorbing sink.
///
/// The sink carries no coordinates, so every terminal value compares and
/// hashes equal and never equals a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Cell { x: i32, y: i32 },
    Terminal,
}

impl State {
    /// Build a non-terminal state at `(x, y)`.
    pub fn at(x: i32, y: i32) -> Self {
        State::Cell { x, y }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Terminal)
    }

    /// Return the cell position, or `None` for the sink.
    pub fn position(&self) -> Option<Position> {
        match *self {
            State::Cell { x, y } => Some(Position { x, y }),
            State::Terminal => None,
        }
    }

    /// Encode as `[x, y, done]`. The sink encodes as `[0, 0, 1]`.
    pub fn to_features(&self) -> [f64; 3] {
        match *self {
            State::Cell { x, y } => [x as f64, y as f64, 0.0],
            State::Terminal => [0.0, 0.0, 1.0],
        }
    }

    /// Inverse of [`State::to_features`]. Any nonzero `done` flag yields the sink.
    pub fn from_features(features: [f64; 3]) -> Self {
        if features[2] != 0.0 {
            State::Terminal
        } else {
            State::at(features[0] as i32, features[1] as i32)
        }
    }
}

impl From<Position> for State {
    fn from(position: Position) -> Self {
        State::Cell {
            x: position.x,
            y: position.y,
        }
    }
}

/// One of the four movement directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Every action in index order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Dense index into [`Action::ALL`].
    pub fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Action::ALL
            .get(index)
            .copied()
            .ok_or(GridWorldError::InvalidActionIndex {
                index,
                count: Action::ALL.len(),
            })
    }

    /// Unit step `(dx, dy)` for this direction; `Up` increases `y`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Action::Up => (0, 1),
            Action::Down => (0, -1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }
}
