use serde::Serialize;
use tracing::debug;

use crate::{
    GridWorld, GridWorldError,
    error::Result,
    space::StateIndex,
    state::{Action, State},
};

/// Floating point tolerance used when validating probability sums.
const PROB_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Serialize)]
/// Dense table form of a grid world: every state index, every action, every outcome.
pub struct TabularMdp {
    discount: f64,
    states: Vec<StateRec>,
}

#[derive(Debug, Clone, Serialize)]
struct StateRec {
    state: State,
    terminal: bool,
    actions: Vec<ActionRec>,
}

#[derive(Debug, Clone, Serialize)]
struct ActionRec {
    action: Action,
    outcomes: Vec<OutcomeRec>,
    #[serde(skip)]
    cdf: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// One reachable successor of a `(state, action)` pair.
pub struct OutcomeRec {
    pub next: StateIndex,
    pub prob: f64,
    pub reward: f64,
}

impl TabularMdp {
    /// Enumerate and validate every transition of `world`.
    pub(crate) fn from_world(world: &GridWorld) -> Result<Self> {
        let mut states = Vec::with_capacity(world.state_count());

        for state in world.all_states() {
            let index = world.state_index(state)?;
            let mut actions = Vec::with_capacity(world.action_count());

            for action in world.all_actions() {
                let distribution = world.transition(state, action)?;
                let mut outcomes: Vec<OutcomeRec> = Vec::new();

                for (next_state, prob) in distribution.support() {
                    let next = world.state_index(next_state)?;
                    let reward = world.outcome_reward(state, action, next_state)?;
                    if let Some(existing) = outcomes.iter_mut().find(|o| o.next == next) {
                        existing.prob += prob;
                    } else {
                        outcomes.push(OutcomeRec { next, prob, reward });
                    }
                }

                let mut cdf = Vec::with_capacity(outcomes.len());
                let mut cumulative = 0.0_f64;
                for outcome in &outcomes {
                    cumulative += outcome.prob;
                    cdf.push(cumulative);
                }

                // Outcome probabilities for an action must sum to 1 within tolerance.
                if (cumulative - 1.0).abs() > PROB_TOLERANCE {
                    return Err(GridWorldError::ProbabilitySum {
                        state: index.get(),
                        action,
                        sum: cumulative,
                        tolerance: PROB_TOLERANCE,
                    });
                }

                actions.push(ActionRec {
                    action,
                    outcomes,
                    cdf,
                });
            }

            states.push(StateRec {
                state,
                terminal: state.is_terminal(),
                actions,
            });
        }

        debug!(states = states.len(), "exported tabular grid world");

        Ok(Self {
            discount: world.discount(),
            states,
        })
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Return the number of states, sink included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Return the state stored at `index`.
    pub fn state(&self, index: StateIndex) -> Option<State> {
        self.states.get(index.offset()).map(|rec| rec.state)
    }

    /// Check whether a state is terminal.
    pub fn is_terminal(&self, index: StateIndex) -> Option<bool> {
        self.states.get(index.offset()).map(|rec| rec.terminal)
    }

    /// Reachable outcomes for `(index, action_id)`.
    pub fn outcomes(&self, index: StateIndex, action_id: usize) -> Option<&[OutcomeRec]> {
        self.action(index, action_id)
            .map(|action| action.outcomes.as_slice())
    }

    /// Probability-weighted reward of taking `action_id` in `index`.
    pub fn expected_reward(&self, index: StateIndex, action_id: usize) -> Option<f64> {
        self.outcomes(index, action_id)
            .map(|outcomes| outcomes.iter().map(|o| o.prob * o.reward).sum())
    }

    /// Sample one transition for `(index, action_id)` using a uniform sample in `[0, 1)`.
    pub fn sample_transition(
        &self,
        index: StateIndex,
        action_id: usize,
        sample: f64,
    ) -> Option<(StateIndex, f64, bool)> {
        let action = self.action(index, action_id)?;
        if action.outcomes.is_empty() {
            return None;
        }

        let mut chosen_idx = action.cdf.partition_point(|p| *p <= sample);
        if chosen_idx >= action.outcomes.len() {
            chosen_idx = action.outcomes.len() - 1;
        }

        let outcome = &action.outcomes[chosen_idx];
        let next_terminal = self.states.get(outcome.next.offset())?.terminal;
        Some((outcome.next, outcome.reward, next_terminal))
    }

    fn action(&self, index: StateIndex, action_id: usize) -> Option<&ActionRec> {
        self.states
            .get(index.offset())?
            .actions
            .get(action_id)
    }
}

impl GridWorld {
    /// Export every transition into a dense table keyed by [`StateIndex`].
    pub fn to_tabular(&self) -> Result<TabularMdp> {
        TabularMdp::from_world(self)
    }
}
