use thiserror::Error;

/// Malformed world construction input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("enclosed world must be at least 3x3, got {width}x{height}")]
    TooSmall { width: usize, height: usize },
    #[error("interior has {actual} rows, expected {expected}")]
    InteriorRowCount { expected: usize, actual: usize },
    #[error("interior row {row} has {actual} columns, expected {expected}")]
    InteriorRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("unknown cell code {code} at ({x}, {y})")]
    UnknownCellCode { x: usize, y: usize, code: u8 },
}

/// Rejected agent registration. A failed registration leaves the runtime untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("agent already registered: {0}")]
    DuplicateAgent(String),
    #[error("agent {agent_id} spawn at ({x}, {y}) is not walkable")]
    InvalidSpawn { agent_id: String, x: i32, y: i32 },
}

/// Errors surfaced by the [`crate::library`] facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error("missing controller for agent: {0}")]
    MissingController(String),
}
