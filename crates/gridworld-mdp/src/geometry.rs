use serde::{Deserialize, Serialize};

use crate::{GridWorldError, error::Result};

/// A cell coordinate on the grid. Coordinates are 1-indexed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Shift this position by `(dx, dy)`. The result may lie off the grid.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

/// Rectangular lattice spanning `[1, width] x [1, height]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Dimensions are validated by the configuration layer before a grid is built.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Closed-interval bounds check on both axes.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        1 <= x && x as i64 <= self.width as i64 && 1 <= y && y as i64 <= self.height as i64
    }

    pub fn contains(&self, position: Position) -> bool {
        self.in_bounds(position.x, position.y)
    }

    /// Reject a queried position that lies off the grid.
    pub fn check(&self, position: Position) -> Result<()> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(GridWorldError::StateOutOfBounds {
                x: position.x,
                y: position.y,
                width: self.width,
                height: self.height,
            })
        }
    }
}
