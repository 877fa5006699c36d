/// Read-only observation handed to a controller each tick.
///
/// Only the acting agent's own state is visible; other agents' positions are
/// not exposed. Built fresh per agent per tick, so controllers cannot reach the
/// runtime's state through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentView<'a> {
    pub tick: u64,
    pub agent_id: &'a str,
    pub x: i32,
    pub y: i32,
    pub energy: i64,
    pub score: i64,
}
