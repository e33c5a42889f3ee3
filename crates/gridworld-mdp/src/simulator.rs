use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::{
    GridWorld,
    error::Result,
    state::{Action, State},
};

#[derive(Debug, Clone)]
/// Seeded simulator over a grid world.
pub struct GridWorldSimulator {
    world: GridWorld,
    rng: ChaCha8Rng,
}

impl GridWorldSimulator {
    /// Create a simulator with deterministic RNG seed.
    pub fn new(world: GridWorld, seed: u64) -> Self {
        Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Borrow the underlying grid world.
    pub fn world(&self) -> &GridWorld {
        &self.world
    }

    /// Draw a uniformly random starting cell.
    pub fn reset(&mut self) -> State {
        self.world.sample_initial_state(&mut self.rng)
    }

    /// Sample one `(next_state, reward, terminal)` transition.
    pub fn step(&mut self, state: State, action: Action) -> Result<(State, f64, bool)> {
        let sample: f64 = self.rng.r#gen();
        let (next_state, reward, terminal) = self.world.sample_step(state, action, sample)?;
        trace!(?state, ?action, ?next_state, reward, "simulated step");
        Ok((next_state, reward, terminal))
    }

    /// Follow `policy` from `start` until the sink or `max_steps`, returning the discounted return.
    pub fn rollout<F>(&mut self, start: State, max_steps: usize, mut policy: F) -> Result<f64>
    where
        F: FnMut(State) -> Action,
    {
        let gamma = self.world.discount();
        let mut state = start;
        let mut total_return = 0.0;
        let mut discount = 1.0;

        for _ in 0..max_steps {
            if state.is_terminal() {
                break;
            }
            let action = policy(state);
            let (next_state, reward, _) = self.step(state, action)?;
            total_return += discount * reward;
            discount *= gamma;
            state = next_state;
        }

        Ok(total_return)
    }
}
