use rand::Rng;
use tracing::{debug, trace};

use crate::{
    config::GridWorldConfig,
    distribution::Distribution,
    error::Result,
    geometry::{Grid, Position},
    reward::RewardModel,
    space::{StateIndex, StateSpace},
    state::{Action, State},
    transition::TransitionEngine,
};

/// A noisy grid world MDP with an absorbing sink behind every positive reward cell.
///
/// All parameters are fixed at construction; every query takes `&self` and
/// returns a fresh value, so one world can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct GridWorld {
    config: GridWorldConfig,
    grid: Grid,
    rewards: RewardModel,
    engine: TransitionEngine,
    space: StateSpace,
}

impl GridWorld {
    /// Validate `config` and build the world.
    pub fn new(config: GridWorldConfig) -> Result<Self> {
        config.validate()?;
        let world = Self::assemble(config);

        debug!(
            width = world.config.width,
            height = world.config.height,
            reward_cells = world.config.reward_positions.len(),
            terminal_cells = world.rewards.terminal_cells().count(),
            tprob = world.config.tprob,
            discount = world.config.discount,
            "built grid world"
        );

        Ok(world)
    }

    fn assemble(config: GridWorldConfig) -> Self {
        let grid = Grid::new(config.width, config.height);
        GridWorld {
            rewards: RewardModel::new(
                grid,
                &config.reward_positions,
                &config.reward_values,
                config.boundary_penalty,
            ),
            engine: TransitionEngine::new(grid, config.tprob),
            space: StateSpace::new(grid),
            grid,
            config,
        }
    }

    pub fn config(&self) -> &GridWorldConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn rewards(&self) -> &RewardModel {
        &self.rewards
    }

    pub fn space(&self) -> StateSpace {
        self.space
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    /// Successor distribution for taking `action` in `state`.
    pub fn transition(&self, state: State, action: Action) -> Result<Distribution> {
        let distribution = self.engine.transition(&self.rewards, state, action)?;
        trace!(?state, ?action, "computed transition");
        Ok(distribution)
    }

    /// Reward for the edge `state --action--> next_state`.
    ///
    /// Neither state is validated: `next_state` may be the off-grid cell the
    /// agent tried to enter, and an off-grid `state` earns only that penalty
    /// term. Use [`GridWorld::outcome_reward`] for checked queries.
    pub fn reward(&self, state: State, action: Action, next_state: State) -> f64 {
        self.rewards.reward(state, action, next_state)
    }

    /// The cell `action` aims at from `state`, whether or not it is on the grid.
    ///
    /// Fails if `state` is a cell outside the grid.
    pub fn attempted_destination(&self, state: State, action: Action) -> Result<State> {
        match state.position() {
            Some(position) => {
                self.grid.check(position)?;
                let (dx, dy) = action.delta();
                Ok(State::from(position.offset(dx, dy)))
            }
            None => Ok(State::Terminal),
        }
    }

    /// Reward earned when `action` in `state` actually lands on `next_state`.
    ///
    /// Successor distributions only ever contain on-grid cells, so staying
    /// put after running into a wall is charged the boundary penalty here.
    /// That covers the intended cell being off the grid as well as noise
    /// with nowhere else to go on a single-row or single-column grid.
    pub fn outcome_reward(
        &self,
        state: State,
        action: Action,
        next_state: State,
    ) -> Result<f64> {
        let Some(position) = state.position() else {
            return Ok(0.0);
        };
        self.grid.check(position)?;

        let mut reward = self.rewards.reward(state, action, next_state);
        if next_state == state && self.bumps_wall(position, action) {
            reward += self.rewards.boundary_penalty();
        }
        Ok(reward)
    }

    /// Whether staying at `position` under `action` can only come from a wall:
    /// the intended cell is off the grid, or every other direction is.
    fn bumps_wall(&self, position: Position, action: Action) -> bool {
        let off_grid = |direction: Action| {
            let (dx, dy) = direction.delta();
            !self.grid.contains(position.offset(dx, dy))
        };
        off_grid(action)
            || Action::ALL
                .into_iter()
                .filter(|direction| *direction != action)
                .all(off_grid)
    }

    /// Sample one `(next_state, reward, terminal)` transition using a uniform sample in `[0, 1)`.
    pub fn sample_step(
        &self,
        state: State,
        action: Action,
        sample: f64,
    ) -> Result<(State, f64, bool)> {
        let next_state = self.transition(state, action)?.sample_with(sample);
        let reward = self.outcome_reward(state, action, next_state)?;
        Ok((next_state, reward, next_state.is_terminal()))
    }

    /// Reward of `state` alone. Fails unless the boundary penalty is zero.
    pub fn state_reward(&self, state: State) -> Result<f64> {
        self.rewards.state_reward(state)
    }

    pub fn is_terminal(&self, state: State) -> bool {
        state.is_terminal()
    }

    pub fn discount(&self) -> f64 {
        self.config.discount
    }

    /// Every state in [`StateIndex`] order, sink last.
    pub fn all_states(&self) -> impl Iterator<Item = State> + use<> {
        self.space.states()
    }

    /// The four actions in their fixed index order.
    pub fn all_actions(&self) -> [Action; 4] {
        Action::ALL
    }

    pub fn state_count(&self) -> usize {
        self.space.len()
    }

    pub fn action_count(&self) -> usize {
        Action::ALL.len()
    }

    pub fn state_index(&self, state: State) -> Result<StateIndex> {
        self.space.index_of(state)
    }

    /// Reverse lookup of a 1-based state index.
    pub fn state_at(&self, index: usize) -> Result<State> {
        self.space.state_at(index)
    }

    pub fn action_index(&self, action: Action) -> usize {
        action.index()
    }

    /// Uniformly random non-terminal cell.
    pub fn sample_initial_state<R: Rng + ?Sized>(&self, rng: &mut R) -> State {
        let x = rng.gen_range(1..=self.grid.width() as i32);
        let y = rng.gen_range(1..=self.grid.height() as i32);
        State::at(x, y)
    }
}

impl Default for GridWorld {
    /// The 10x10 world with the four default reward cells.
    fn default() -> Self {
        Self::assemble(GridWorldConfig::default())
    }
}
