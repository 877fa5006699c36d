use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::config::SimConfig;
use super::context::AgentView;
use super::controller::Controller;
use crate::error::RegistrationError;
use crate::model::event::compose_note;
use crate::model::{AgentState, CellEffect, CellType, MoveOutcome, TickEvent, WorldModel};

/// Lifecycle of a runtime as a whole. Derived from its state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimePhase {
    /// No agents registered and no ticks run.
    Idle,
    /// Agents registered, no ticks run yet.
    Registering,
    Running,
    /// `max_ticks` reached or every agent dead. Final.
    Terminated,
}

/// What a single [`SimulationRuntime::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Agents that were alive at the start of the tick; one event each.
    pub agents_processed: usize,
    pub deaths: usize,
}

struct RegisteredAgent {
    state: AgentState,
    controller: Box<dyn Controller>,
}

/// Owns the agents and their controllers and resolves ticks against a shared,
/// read-only [`WorldModel`].
///
/// Agents are processed in registration order, one full tick at a time. Every
/// processed agent produces exactly one [`TickEvent`].
pub struct SimulationRuntime {
    world: Arc<WorldModel>,
    config: SimConfig,
    /// Registration order; this is the per-tick processing order.
    agents: Vec<RegisteredAgent>,
    index: HashMap<String, usize>,
    tick: u64,
    events: Vec<TickEvent>,
    terminated: bool,
}

impl SimulationRuntime {
    pub fn new(world: impl Into<Arc<WorldModel>>, config: SimConfig) -> Self {
        Self {
            world: world.into(),
            config,
            agents: Vec::new(),
            index: HashMap::new(),
            tick: 0,
            events: Vec::new(),
            terminated: false,
        }
    }

    /// Add an agent and bind its controller.
    ///
    /// Fails without side effects if the id is taken or the spawn cell is not
    /// walkable.
    pub fn register_agent(
        &mut self,
        state: AgentState,
        controller: impl Controller + 'static,
    ) -> Result<(), RegistrationError> {
        if self.index.contains_key(&state.agent_id) {
            return Err(RegistrationError::DuplicateAgent(state.agent_id));
        }
        if !self.world.is_walkable(state.x, state.y) {
            return Err(RegistrationError::InvalidSpawn {
                agent_id: state.agent_id,
                x: state.x,
                y: state.y,
            });
        }

        tracing::trace!(agent = %state.agent_id, x = state.x, y = state.y, "agent registered");
        self.index.insert(state.agent_id.clone(), self.agents.len());
        self.agents.push(RegisteredAgent {
            state,
            controller: Box::new(controller),
        });
        Ok(())
    }

    /// Advance exactly one tick.
    ///
    /// Returns `None` without touching anything once the runtime is terminated
    /// (or before any agent is alive to process).
    pub fn step(&mut self) -> Option<TickReport> {
        if self.is_terminated() {
            return None;
        }

        self.tick += 1;
        let tick = self.tick;

        // Events for this tick land in the log together.
        let mut pending = Vec::new();
        let mut deaths = 0;
        for agent in self.agents.iter_mut().filter(|a| a.state.alive) {
            let event = resolve_turn(&self.world, &self.config, tick, agent);
            if !agent.state.alive {
                deaths += 1;
            }
            pending.push(event);
        }

        let report = TickReport {
            tick,
            agents_processed: pending.len(),
            deaths,
        };
        self.events.extend(pending);

        if self.tick >= self.config.max_ticks || self.living_agents() == 0 {
            self.terminated = true;
            tracing::info!(
                tick = self.tick,
                living = self.living_agents(),
                events = self.events.len(),
                "simulation terminated"
            );
        }

        Some(report)
    }

    /// Step until `max_ticks` is reached or no agent is alive. Returns the
    /// number of ticks this call executed (zero if already terminated).
    pub fn run(&mut self) -> u64 {
        let start = self.tick;
        while self.step().is_some() {}
        self.tick - start
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated || self.tick >= self.config.max_ticks || self.living_agents() == 0
    }

    pub fn phase(&self) -> RuntimePhase {
        if self.agents.is_empty() && self.tick == 0 {
            RuntimePhase::Idle
        } else if self.is_terminated() {
            RuntimePhase::Terminated
        } else if self.tick == 0 {
            RuntimePhase::Registering
        } else {
            RuntimePhase::Running
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn world(&self) -> &WorldModel {
        &self.world
    }

    /// The full event log, oldest first.
    pub fn events(&self) -> &[TickEvent] {
        &self.events
    }

    pub fn agent(&self, agent_id: &str) -> Option<&AgentState> {
        self.index.get(agent_id).map(|&i| &self.agents[i].state)
    }

    /// All registered agents, dead ones included, in registration order.
    pub fn agents(&self) -> impl Iterator<Item = &AgentState> {
        self.agents.iter().map(|a| &a.state)
    }

    pub fn living_agents(&self) -> usize {
        self.agents.iter().filter(|a| a.state.alive).count()
    }
}

impl fmt::Debug for SimulationRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationRuntime")
            .field("tick", &self.tick)
            .field("config", &self.config)
            .field("agents", &self.agents().collect::<Vec<_>>())
            .field("events", &self.events.len())
            .field("terminated", &self.terminated)
            .finish_non_exhaustive()
    }
}

/// Ask one living agent's controller for an action and apply it.
fn resolve_turn(
    world: &WorldModel,
    config: &SimConfig,
    tick: u64,
    agent: &mut RegisteredAgent,
) -> TickEvent {
    let view = AgentView {
        tick,
        agent_id: &agent.state.agent_id,
        x: agent.state.x,
        y: agent.state.y,
        energy: agent.state.energy,
        score: agent.state.score,
    };
    let action = agent.controller.decide(&view).normalized();
    if !action.is_recognized() {
        tracing::warn!(
            agent = %agent.state.agent_id,
            action = %action,
            "unrecognized action treated as STAY"
        );
    }

    let state = &mut agent.state;
    let (dx, dy) = action.displacement();
    let target = (state.x.saturating_add(dx), state.y.saturating_add(dy));
    let outcome = if !world.is_walkable(target.0, target.1) {
        MoveOutcome::Blocked
    } else if (dx, dy) == (0, 0) {
        MoveOutcome::Idle
    } else {
        MoveOutcome::Moved
    };

    let old_position = state.position();
    if outcome == MoveOutcome::Moved {
        state.x = target.0;
        state.y = target.1;
    }
    let move_cost = if state.position() != old_position {
        config.move_energy_cost
    } else {
        config.idle_energy_cost
    };

    let (effect, cell_energy, score_delta) = match world.cell(state.x, state.y) {
        CellType::Hazard => (CellEffect::Hazard, config.hazard_damage.saturating_neg(), 0),
        CellType::Resource => (CellEffect::Resource, 0, config.resource_reward),
        CellType::Empty | CellType::Wall => (CellEffect::None, 0, 0),
    };

    // Config values are caller input; saturate so resolution never panics.
    let energy_delta = cell_energy.saturating_sub(move_cost);
    state.energy = state.energy.saturating_add(energy_delta);
    state.score = state.score.saturating_add(score_delta);
    let died = state.energy <= 0;
    if died {
        state.alive = false;
        tracing::info!(agent = %state.agent_id, tick, energy = state.energy, "agent died");
    }

    let note = compose_note(outcome, effect, died);
    tracing::debug!(
        agent = %state.agent_id,
        tick,
        action = %action,
        x = state.x,
        y = state.y,
        energy_delta,
        score_delta,
        note = %note,
        "turn resolved"
    );

    TickEvent {
        tick,
        agent_id: state.agent_id.clone(),
        action,
        position: state.position(),
        energy_delta,
        score_delta,
        note,
    }
}
