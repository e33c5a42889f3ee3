use gridworld_mdp::{GridWorld, State};

fn main() {
    tracing_subscriber::fmt::init();

    let world = GridWorld::default();
    let table = world.to_tabular().expect("failed to export grid world");

    for (x, y) in [(1, 1), (1, 5), (5, 5), (9, 3)] {
        let index = world.state_index(State::at(x, y)).expect("cell is on the grid");
        for action in world.all_actions() {
            let expected = table
                .expected_reward(index, world.action_index(action))
                .unwrap_or(0.0);
            let dist = world
                .transition(State::at(x, y), action)
                .expect("cell is on the grid");
            let support: Vec<String> = dist
                .support()
                .map(|(next, p)| format!("{next:?}={p:.2}"))
                .collect();
            println!(
                "({x},{y}) {action:?}: r={expected:.2} [{}]",
                support.join(", ")
            );
        }
    }
}
