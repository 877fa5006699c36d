//! Actions a controller can request for its agent.
//!
//! The five recognised moves each map to a fixed displacement. Anything else a
//! controller hands back is kept as [`AgentAction::Other`] so it still shows up
//! in the event log, but it resolves like `STAY`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AgentAction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Stay,
    /// Unrecognised action; treated as `Stay`.
    Other(String),
}

impl AgentAction {
    /// The recognised moves, in the order random walkers draw from.
    pub const MOVES: [AgentAction; 5] = [
        AgentAction::Up,
        AgentAction::Down,
        AgentAction::Left,
        AgentAction::Right,
        AgentAction::Stay,
    ];

    /// Parse a move name. Unknown names become `Other`; an empty name is `Stay`.
    pub fn parse(s: &str) -> AgentAction {
        AgentAction::try_from(s.to_string()).unwrap_or_default()
    }

    /// Map an empty `Other` to `Stay` so every logged action has a name that
    /// reads back.
    pub fn normalized(self) -> AgentAction {
        match self {
            AgentAction::Other(s) if s.is_empty() => AgentAction::Stay,
            other => other,
        }
    }

    /// `(dx, dy)` with `y` growing downwards.
    pub fn displacement(&self) -> (i32, i32) {
        match self {
            AgentAction::Up => (0, -1),
            AgentAction::Down => (0, 1),
            AgentAction::Left => (-1, 0),
            AgentAction::Right => (1, 0),
            AgentAction::Stay | AgentAction::Other(_) => (0, 0),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AgentAction::Other(_))
    }
}

string_enum_open!(AgentAction, "agent action", {
    Up => "UP",
    Down => "DOWN",
    Left => "LEFT",
    Right => "RIGHT",
    Stay => "STAY",
});
