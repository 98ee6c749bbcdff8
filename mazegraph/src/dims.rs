use std::fmt;

use serde::{Deserialize, Serialize};

/// Cell coordinate, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos(pub usize, pub usize);

/// Signed offset between two cells, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset(pub isize, pub isize);

/// Grid size, `(rows, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size(pub usize, pub usize);

impl Pos {
    /// Moves by `off`, returns `None` if the result would have a negative component.
    pub fn checked_add(self, off: Offset) -> Option<Pos> {
        Some(Pos(
            self.0.checked_add_signed(off.0)?,
            self.1.checked_add_signed(off.1)?,
        ))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Size {
    pub fn rows(self) -> usize {
        self.0
    }

    pub fn cols(self) -> usize {
        self.1
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}

/// Orthogonal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Order in which neighbors are probed, north first then clockwise.
    pub fn in_order() -> [Direction; 4] {
        use Direction::*;
        [North, East, South, West]
    }

    pub fn offset(self) -> Offset {
        match self {
            Direction::North => Offset(-1, 0),
            Direction::East => Offset(0, 1),
            Direction::South => Offset(1, 0),
            Direction::West => Offset(0, -1),
        }
    }
}
