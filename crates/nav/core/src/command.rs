use std::fmt;

use strum::EnumIter;

/// Discrete grid position expressed in cell coordinates, 0-based.
///
/// Row 0 is the top edge, column 0 the left edge. Coordinates are signed so
/// candidate positions can be formed before the bounds check; every position
/// observable outside the walker is inside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Fixed start cell for every request.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four unit movement vectors.
///
/// Phrase spellings ("prawo", "na prawo", "w prawo") are a lexicon concern;
/// by the time a command exists the direction is already canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit displacement as (row delta, column delta).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Step count for a single command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quantity {
    /// Fixed number of unit steps.
    Steps(u32),
    /// Move until the boundary in the commanded direction, measured from the
    /// position at the time the command executes.
    ToEdge,
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Steps(1)
    }
}

/// A parsed movement order. Sequence order is execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    pub direction: Direction,
    pub quantity: Quantity,
}

impl Command {
    pub const fn new(direction: Direction, quantity: Quantity) -> Self {
        Self {
            direction,
            quantity,
        }
    }
}
