#![allow(dead_code)]

use gridsim::model::*;
use gridsim::sim::{RandomWalkController, SimConfig, SimulationRuntime, TickReport};

/// 7x7 world: a resource row, a hazard pocket and an interior wall stub.
pub fn build_test_world() -> WorldModel {
    let interior = vec![
        vec![0, 0, 2, 0, 0],
        vec![0, 1, 0, 3, 0],
        vec![2, 0, 0, 0, 2],
        vec![0, 3, 0, 1, 0],
        vec![0, 0, 2, 0, 0],
    ];
    WorldModel::enclosed(7, 7, Some(&interior)).unwrap()
}

/// Runtime with one seeded random walker per `(id, x, y, seed)`.
pub fn walkers(
    world: WorldModel,
    config: SimConfig,
    agents: &[(&str, i32, i32, u64)],
) -> SimulationRuntime {
    let mut runtime = SimulationRuntime::new(world, config);
    for &(id, x, y, seed) in agents {
        runtime
            .register_agent(AgentState::new(id, x, y), RandomWalkController::new(seed))
            .unwrap();
    }
    runtime
}

/// Step to termination, collecting every tick's report.
pub fn step_all(runtime: &mut SimulationRuntime) -> Vec<TickReport> {
    std::iter::from_fn(|| runtime.step()).collect()
}

pub fn events_json(runtime: &SimulationRuntime) -> String {
    serde_json::to_string(runtime.events()).unwrap()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
