//! One-call setup for the common case: build a world, bind controllers to
//! agents by id, run to completion and summarise.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{RegistrationError, SimulationError, ValidationError};
use crate::model::{AgentState, WorldModel};
use crate::sim::{Controller, SimConfig, SimulationRuntime};

/// Headline numbers for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub ticks_executed: u64,
    pub living_agents: usize,
    /// Highest score among all agents, dead ones included; 0 with no agents.
    pub top_score: i64,
    pub total_events: usize,
}

impl Summary {
    pub fn of(runtime: &SimulationRuntime) -> Self {
        Self {
            ticks_executed: runtime.tick(),
            living_agents: runtime.living_agents(),
            top_score: runtime.agents().map(|a| a.score).max().unwrap_or(0),
            total_events: runtime.events().len(),
        }
    }
}

pub fn create_world(
    width: usize,
    height: usize,
    interior: Option<&[Vec<u8>]>,
) -> Result<WorldModel, ValidationError> {
    WorldModel::enclosed(width, height, interior)
}

/// Register every agent with the controller keyed by its id, run until
/// termination, and return the runtime alongside its [`Summary`].
///
/// Agents are registered in the order given. Controllers without a matching
/// agent are dropped.
pub fn run_simulation(
    world: WorldModel,
    agents: Vec<AgentState>,
    mut controllers: HashMap<String, Box<dyn Controller>>,
    config: Option<SimConfig>,
) -> Result<(SimulationRuntime, Summary), SimulationError> {
    let mut runtime = SimulationRuntime::new(world, config.unwrap_or_default());
    for state in agents {
        let Some(controller) = controllers.remove(&state.agent_id) else {
            if runtime.agent(&state.agent_id).is_some() {
                return Err(RegistrationError::DuplicateAgent(state.agent_id).into());
            }
            return Err(SimulationError::MissingController(state.agent_id));
        };
        runtime.register_agent(state, controller)?;
    }

    let ticks = runtime.run();
    let summary = Summary::of(&runtime);
    tracing::info!(
        ticks,
        living = summary.living_agents,
        top_score = summary.top_score,
        events = summary.total_events,
        "simulation finished"
    );
    Ok((runtime, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{RandomWalkController, ScriptedController};

    fn boxed(c: impl Controller + 'static) -> Box<dyn Controller> {
        Box::new(c)
    }

    #[test]
    fn missing_controller_reported() {
        let world = create_world(5, 5, None).unwrap();
        let agents = vec![AgentState::new("a", 1, 1)];
        let err = run_simulation(world, agents, HashMap::new(), None).unwrap_err();
        assert_eq!(err, SimulationError::MissingController("a".to_string()));
    }

    #[test]
    fn duplicate_agent_reported() {
        let world = create_world(5, 5, None).unwrap();
        let agents = vec![AgentState::new("a", 1, 1), AgentState::new("a", 2, 2)];
        let controllers = HashMap::from([("a".to_string(), boxed(ScriptedController::default()))]);
        let err = run_simulation(world, agents, controllers, None).unwrap_err();
        assert_eq!(
            err,
            SimulationError::Registration(RegistrationError::DuplicateAgent("a".to_string()))
        );
    }

    #[test]
    fn invalid_spawn_surfaces_as_registration_error() {
        let world = create_world(5, 5, None).unwrap();
        let agents = vec![AgentState::new("a", 0, 0)];
        let controllers = HashMap::from([("a".to_string(), boxed(ScriptedController::default()))]);
        let err = run_simulation(world, agents, controllers, None).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Registration(RegistrationError::InvalidSpawn { .. })
        ));
    }

    #[test]
    fn summary_matches_runtime() {
        let world = create_world(6, 6, None).unwrap();
        let agents = vec![AgentState::new("a", 1, 1), AgentState::new("b", 4, 4)];
        let controllers = HashMap::from([
            ("a".to_string(), boxed(RandomWalkController::new(7))),
            ("b".to_string(), boxed(RandomWalkController::new(8))),
        ]);
        let (runtime, summary) = run_simulation(
            world,
            agents,
            controllers,
            Some(SimConfig::default().with_max_ticks(10)),
        )
        .unwrap();

        assert_eq!(summary.ticks_executed, 10);
        assert_eq!(summary.total_events, runtime.events().len());
        assert_eq!(summary.total_events, 20);
        assert_eq!(summary.living_agents, 2);
        assert_eq!(summary.top_score, 0);
    }

    #[test]
    fn empty_run_summary() {
        let world = create_world(3, 3, None).unwrap();
        let (runtime, summary) = run_simulation(world, Vec::new(), HashMap::new(), None).unwrap();
        assert_eq!(runtime.tick(), 0);
        assert_eq!(
            summary,
            Summary {
                ticks_executed: 0,
                living_agents: 0,
                top_score: 0,
                total_events: 0
            }
        );
    }

    #[test]
    fn interior_validation_error_converts() {
        let err: SimulationError = create_world(2, 2, None).unwrap_err().into();
        assert!(matches!(err, SimulationError::Validation(ValidationError::TooSmall { .. })));
    }
}
