use serde::{Deserialize, Serialize};

/// Rules and limits for a simulation run.
///
/// Missing fields fall back to [`SimConfig::default`] when deserialized, so a
/// partial JSON object like `{"max_ticks": 50}` is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// The run stops once the tick counter reaches this.
    pub max_ticks: u64,
    /// Energy lost on every tick spent on a hazard cell.
    pub hazard_damage: i64,
    /// Score gained on every tick spent on a resource cell.
    pub resource_reward: i64,
    /// Energy cost when the agent's position does not change.
    pub idle_energy_cost: i64,
    /// Energy cost when the agent moves to a new cell.
    pub move_energy_cost: i64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_ticks: 1000,
            hazard_damage: 20,
            resource_reward: 10,
            idle_energy_cost: 1,
            move_energy_cost: 2,
        }
    }
}

impl SimConfig {
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn with_hazard_damage(mut self, hazard_damage: i64) -> Self {
        self.hazard_damage = hazard_damage;
        self
    }

    pub fn with_resource_reward(mut self, resource_reward: i64) -> Self {
        self.resource_reward = resource_reward;
        self
    }

    pub fn with_energy_costs(mut self, idle: i64, moving: i64) -> Self {
        self.idle_energy_cost = idle;
        self.move_energy_cost = moving;
        self
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
