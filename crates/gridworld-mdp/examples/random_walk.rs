use std::path::PathBuf;

use gridworld_mdp::{Action, GridWorld, GridWorldSimulator, build_yaml};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() {
    tracing_subscriber::fmt::init();

    let world = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => build_yaml(&path).expect("failed to build grid world from YAML"),
        None => GridWorld::default(),
    };

    let mut policy_rng = ChaCha8Rng::seed_from_u64(2024);
    let mut sim = GridWorldSimulator::new(world, 12345);

    let episodes = 100;
    let mut total = 0.0;
    for _ in 0..episodes {
        let start = sim.reset();
        total += sim
            .rollout(start, 200, |_| Action::ALL[policy_rng.gen_range(0..4)])
            .expect("rollout failed");
    }

    println!("episodes={episodes}");
    println!("average_discounted_return={:.6}", total / episodes as f64);
}
