use serde::{Deserialize, Serialize};

/// Grid coordinate. `x` is the row and `y` the column; both are signed so callers can
/// probe positions just outside the grid without wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Edge,
    Null,
    Floor,
    Wall,
    Spawn,
    Goal,
}

impl CellKind {
    /// Kinds a guard or the player may stand on.
    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::Spawn)
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Edge => 0,
            Self::Null => 1,
            Self::Floor => 2,
            Self::Wall => 3,
            Self::Spawn => 4,
            Self::Goal => 5,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Edge => '#',
            Self::Null | Self::Wall => '%',
            Self::Floor => '.',
            Self::Spawn => '@',
            Self::Goal => '>',
        }
    }
}
