use rand::Rng;

use crate::state::State;

/// Number of candidate successors: four neighbours plus stay.
pub const SLOT_COUNT: usize = 5;

/// Discrete distribution over the five candidate successors of one query.
///
/// Slots are ordered right, left, down, up, stay. Zero-probability slots are
/// kept so callers can inspect every candidate; [`Distribution::support`]
/// skips them. Each query builds its own value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    states: [State; SLOT_COUNT],
    probs: [f64; SLOT_COUNT],
}

impl Distribution {
    pub(crate) fn new(states: [State; SLOT_COUNT], probs: [f64; SLOT_COUNT]) -> Self {
        Distribution { states, probs }
    }

    /// Iterate every `(state, probability)` slot, including zero-mass ones.
    pub fn iter(&self) -> impl Iterator<Item = (State, f64)> + '_ {
        self.states.iter().copied().zip(self.probs.iter().copied())
    }

    /// Iterate the slots carrying nonzero probability.
    pub fn support(&self) -> impl Iterator<Item = (State, f64)> + '_ {
        self.iter().filter(|(_, p)| *p > 0.0)
    }

    /// Total probability assigned to `state`, summed over matching slots.
    pub fn probability_of(&self, state: State) -> f64 {
        self.iter()
            .filter(|(candidate, _)| *candidate == state)
            .map(|(_, p)| p)
            .sum()
    }

    /// Sum of all slot probabilities.
    pub fn total(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Draw a successor using `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> State {
        self.sample_with(rng.r#gen::<f64>())
    }

    /// Draw a successor from a uniform sample in `[0, 1)`.
    pub fn sample_with(&self, sample: f64) -> State {
        let mut cumulative = 0.0_f64;
        for (state, p) in self.support() {
            cumulative += p;
            if sample < cumulative {
                return state;
            }
        }

        // Rounding can leave the cumulative sum just under 1.0.
        self.support()
            .last()
            .map_or(self.states[SLOT_COUNT - 1], |(state, _)| state)
    }
}
