#[macro_use]
mod macros;

pub mod action;
pub mod agent;
pub mod cell;
pub mod event;
pub mod grid;

pub use action::AgentAction;
pub use agent::{AgentState, DEFAULT_ENERGY};
pub use cell::CellType;
pub use event::{CellEffect, MoveOutcome, TickEvent};
pub use grid::WorldModel;
