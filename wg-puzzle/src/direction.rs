//! Placement direction vectors.
//!
//! Words are placed along one of four straight-line directions. Verification
//! additionally scans each direction reversed, so a word placed east is also
//! found when read west-to-east from its far end.

use serde::{Deserialize, Serialize};

/// One of the four placement directions for a word.
///
/// Deltas are (column, row) steps per letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right.
    East,
    /// Top to bottom.
    South,
    /// Diagonal, down-right.
    SouthEast,
    /// Diagonal, down-left.
    SouthWest,
}

impl Direction {
    /// All placement directions, in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The (dcol, drow) step applied per letter.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::South => "south",
            Direction::SouthEast => "south-east",
            Direction::SouthWest => "south-west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
