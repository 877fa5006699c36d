use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CellType
// ---------------------------------------------------------------------------

/// What occupies one grid location.
///
/// Interior layouts are supplied as numeric codes (`0..=3`); serialized form is
/// the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CellType {
    #[default]
    Empty,
    Wall,
    Resource,
    Hazard,
}

impl CellType {
    pub const ALL: [CellType; 4] = [
        CellType::Empty,
        CellType::Wall,
        CellType::Resource,
        CellType::Hazard,
    ];

    /// Numeric layout code.
    pub fn code(self) -> u8 {
        match self {
            CellType::Empty => 0,
            CellType::Wall => 1,
            CellType::Resource => 2,
            CellType::Hazard => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<CellType> {
        CellType::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn is_walkable(self) -> bool {
        self != CellType::Wall
    }

    /// Single-character glyph used by the world's `Display` rendering.
    pub fn glyph(self) -> char {
        match self {
            CellType::Empty => '.',
            CellType::Wall => '#',
            CellType::Resource => '$',
            CellType::Hazard => '!',
        }
    }
}

string_enum!(CellType {
    Empty => "empty",
    Wall => "wall",
    Resource => "resource",
    Hazard => "hazard",
});
