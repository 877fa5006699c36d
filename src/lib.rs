pub mod error;
pub mod flush;
pub mod library;
pub mod model;
pub mod sim;

pub use error::{RegistrationError, SimulationError, ValidationError};
pub use library::{Summary, run_simulation};
pub use model::{AgentAction, AgentState, CellType, TickEvent, WorldModel};
pub use sim::{
    AgentView, Controller, RandomWalkController, ScriptedController, SimConfig, SimulationRuntime,
};
