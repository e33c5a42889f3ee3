mod config;
mod distribution;
mod domain;
mod error;
mod geometry;
mod io;
mod mdp;
mod reward;
mod simulator;
mod space;
mod state;
mod tabular;
mod transition;

#[cfg(test)]
mod tests;

pub use config::GridWorldConfig;
pub use distribution::{Distribution, SLOT_COUNT};
pub use domain::MdpDomain;
pub use error::{GridWorldError, Result};
pub use geometry::{Grid, Position};
pub use io::{build_yaml, load_yaml, save_tabular_yaml, save_yaml};
pub use mdp::GridWorld;
pub use reward::RewardModel;
pub use simulator::GridWorldSimulator;
pub use space::{StateIndex, StateSpace};
pub use state::{Action, State};
pub use tabular::{OutcomeRec, TabularMdp};
pub use transition::TransitionEngine;
