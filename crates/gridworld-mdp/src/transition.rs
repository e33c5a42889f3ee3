use crate::{
    distribution::{Distribution, SLOT_COUNT},
    error::Result,
    geometry::Grid,
    reward::RewardModel,
    state::{Action, State},
};

const RIGHT: usize = 0;
const LEFT: usize = 1;
const DOWN: usize = 2;
const UP: usize = 3;
const STAY: usize = 4;

/// Number of directional slots that share the noise mass with the intended one.
const NOISE_SLOTS: usize = 3;

/// Noisy movement dynamics over a grid.
///
/// The intended direction receives `tprob`; the remaining `1 - tprob` is
/// spread evenly over the other three directions that stay on the grid.
/// Walking straight into a wall is a certain bump.
#[derive(Debug, Clone, Copy)]
pub struct TransitionEngine {
    grid: Grid,
    tprob: f64,
}

impl TransitionEngine {
    pub(crate) fn new(grid: Grid, tprob: f64) -> Self {
        TransitionEngine { grid, tprob }
    }

    pub fn tprob(&self) -> f64 {
        self.tprob
    }

    /// Distribution over successors of `state` under `action`.
    ///
    /// Fails if `state` is a cell outside the grid; inputs are never clamped.
    pub fn transition(
        &self,
        rewards: &RewardModel,
        state: State,
        action: Action,
    ) -> Result<Distribution> {
        let Some(position) = state.position() else {
            return Ok(certain([State::Terminal; SLOT_COUNT]));
        };

        self.grid.check(position)?;

        let candidates = [
            position.offset(1, 0),
            position.offset(-1, 0),
            position.offset(0, -1),
            position.offset(0, 1),
            position,
        ];
        let mut states = candidates.map(State::from);

        if rewards.is_terminal_cell(position) {
            states[STAY] = State::Terminal;
            return Ok(certain(states));
        }

        let target = slot_of(action);
        if !self.grid.contains(candidates[target]) {
            return Ok(certain(states));
        }

        let noise = 1.0 - self.tprob;
        let mut probs = [noise / NOISE_SLOTS as f64; SLOT_COUNT];
        probs[target] = self.tprob;
        probs[STAY] = 0.0;

        let mut open = [false; SLOT_COUNT];
        let mut blocked = 0;
        for slot in [RIGHT, LEFT, DOWN, UP] {
            if slot == target {
                continue;
            }
            if self.grid.contains(candidates[slot]) {
                open[slot] = true;
            } else {
                probs[slot] = 0.0;
                blocked += 1;
            }
        }

        match NOISE_SLOTS - blocked {
            NOISE_SLOTS => {}
            0 => probs[STAY] = noise,
            remaining => {
                let share = noise / remaining as f64;
                for (p, _) in probs.iter_mut().zip(open).filter(|(_, open)| *open) {
                    *p = share;
                }
            }
        }

        Ok(Distribution::new(states, probs))
    }
}

/// Probability one on the stay slot.
fn certain(states: [State; SLOT_COUNT]) -> Distribution {
    let mut probs = [0.0; SLOT_COUNT];
    probs[STAY] = 1.0;
    Distribution::new(states, probs)
}

fn slot_of(action: Action) -> usize {
    match action {
        Action::Right => RIGHT,
        Action::Left => LEFT,
        Action::Down => DOWN,
        Action::Up => UP,
    }
}
