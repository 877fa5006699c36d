use serde::{Deserialize, Serialize};

use super::action::AgentAction;

/// How an agent's requested move resolved against the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    Moved,
    /// Zero displacement (`STAY` or an unrecognised action).
    Idle,
    /// Target cell not walkable; the agent stayed put.
    Blocked,
}

impl MoveOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveOutcome::Moved => "moved",
            MoveOutcome::Idle => "idle",
            MoveOutcome::Blocked => "blocked",
        }
    }
}

/// Effect of the cell an agent ends its turn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellEffect {
    None,
    Hazard,
    Resource,
}

impl CellEffect {
    pub fn as_str(self) -> &'static str {
        match self {
            CellEffect::None => "",
            CellEffect::Hazard => "hazard",
            CellEffect::Resource => "resource",
        }
    }
}

pub const DEAD_TAG: &str = "dead";

/// Comma-joined tags for an event note, skipping empty ones.
pub fn compose_note(outcome: MoveOutcome, effect: CellEffect, died: bool) -> String {
    [
        outcome.as_str(),
        effect.as_str(),
        if died { DEAD_TAG } else { "" },
    ]
    .into_iter()
    .filter(|tag| !tag.is_empty())
    .collect::<Vec<_>>()
    .join(",")
}

/// One agent's outcome for one tick. Appended to the runtime's log and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    pub tick: u64,
    pub agent_id: String,
    pub action: AgentAction,
    pub position: (i32, i32),
    /// Net change: cell effect minus movement cost.
    pub energy_delta: i64,
    pub score_delta: i64,
    pub note: String,
}

impl TickEvent {
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.note.split(',').filter(|t| !t.is_empty())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().any(|t| t == tag)
    }
}
