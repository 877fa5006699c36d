use serde::{Deserialize, Serialize};

pub const DEFAULT_ENERGY: i64 = 100;

/// Position, energy, score and liveness of one agent.
///
/// Created by the caller and handed to the runtime at registration; from then
/// on only the runtime mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    pub agent_id: String,
    pub x: i32,
    pub y: i32,
    pub energy: i64,
    pub score: i64,
    pub alive: bool,
}

impl AgentState {
    /// A living agent at `(x, y)` with default energy and zero score.
    pub fn new(agent_id: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            agent_id: agent_id.into(),
            x,
            y,
            energy: DEFAULT_ENERGY,
            score: 0,
            alive: true,
        }
    }

    pub fn with_energy(mut self, energy: i64) -> Self {
        self.energy = energy;
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
