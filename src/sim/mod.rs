mod config;
mod context;
mod controller;
mod runtime;

pub use config::SimConfig;
pub use context::AgentView;
pub use controller::{
    Controller, FnController, RandomWalkController, ScriptedController, from_fn,
};
pub use runtime::{RuntimePhase, SimulationRuntime, TickReport};
