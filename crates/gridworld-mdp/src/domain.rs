use std::hash::Hash;

use rand::Rng;

use crate::{
    GridWorld,
    error::Result,
    state::{Action, State},
};

/// Generic interface a planner uses to drive an MDP with arbitrary state types.
pub trait MdpDomain {
    type State: Clone + Eq + Hash;

    /// Draw an initial state of the domain.
    fn start_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::State;

    /// Return whether a state is terminal.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Return the number of available actions for a state.
    fn num_actions(&self, state: &Self::State) -> usize;

    /// Sample one `(next_state, reward, terminal)` transition using a uniform sample in `[0, 1)`.
    fn step(
        &self,
        state: &Self::State,
        action_id: usize,
        sample: f64,
    ) -> Result<(Self::State, f64, bool)>;
}

impl MdpDomain for GridWorld {
    type State = State;

    fn start_state<R: Rng + ?Sized>(&self, rng: &mut R) -> State {
        self.sample_initial_state(rng)
    }

    fn is_terminal(&self, state: &State) -> bool {
        state.is_terminal()
    }

    /// Every action stays available in the sink; each one is a self-loop.
    fn num_actions(&self, _state: &State) -> usize {
        self.action_count()
    }

    fn step(&self, state: &State, action_id: usize, sample: f64) -> Result<(State, f64, bool)> {
        let action = Action::from_index(action_id)?;
        self.sample_step(*state, action, sample)
    }
}
