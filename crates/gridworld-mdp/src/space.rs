use serde::Serialize;

use crate::{
    GridWorldError,
    error::Result,
    geometry::{Grid, Position},
    state::State,
};

/// Dense 1-based index of a state: cells first with `x` varying fastest,
/// then the sink at `width * height + 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StateIndex(usize);

impl StateIndex {
    /// The 1-based ordinal.
    pub fn get(self) -> usize {
        self.0
    }

    /// The 0-based position, for indexing value tables.
    pub fn offset(self) -> usize {
        self.0 - 1
    }
}

/// Enumerates states of a grid and maps them to and from [`StateIndex`].
#[derive(Debug, Clone, Copy)]
pub struct StateSpace {
    grid: Grid,
}

impl StateSpace {
    pub(crate) fn new(grid: Grid) -> Self {
        StateSpace { grid }
    }

    /// Total number of states, sink included.
    pub fn len(&self) -> usize {
        self.grid.cell_count() + 1
    }

    /// A space always holds at least the sink.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every state in index order.
    pub fn states(&self) -> impl Iterator<Item = State> + use<> {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;
        (1..=height)
            .flat_map(move |y| (1..=width).map(move |x| State::at(x, y)))
            .chain(std::iter::once(State::Terminal))
    }

    pub fn index_of(&self, state: State) -> Result<StateIndex> {
        match state {
            State::Terminal => Ok(StateIndex(self.len())),
            State::Cell { x, y } => {
                self.grid.check(Position { x, y })?;
                let width = self.grid.width() as usize;
                Ok(StateIndex(x as usize + (y as usize - 1) * width))
            }
        }
    }

    /// Reverse of [`StateSpace::index_of`] for a 1-based ordinal.
    pub fn state_at(&self, index: usize) -> Result<State> {
        let count = self.len();
        if index == 0 || index > count {
            return Err(GridWorldError::UnknownStateIndex { index, count });
        }
        if index == count {
            return Ok(State::Terminal);
        }

        let width = self.grid.width() as usize;
        let zero_based = index - 1;
        let x = (zero_based % width) as i32 + 1;
        let y = (zero_based / width) as i32 + 1;
        Ok(State::at(x, y))
    }
}
