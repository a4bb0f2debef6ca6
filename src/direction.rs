use crate::{Coordinate, InputError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four directions a line of [tiles](crate::Tile) can be laid in.
///
/// Rows grow downwards and columns grow to the right, so [Direction::Up] decreases the row.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `(-1, 0)`.
    Up,
    /// `(1, 0)`.
    Down,
    /// `(0, -1)`.
    Left,
    /// `(0, 1)`.
    Right,
}

impl Direction {
    /// # Returns
    ///
    /// An array of all [`Direction`] variants.
    #[inline]
    pub fn directions() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// # Returns
    ///
    /// The unit `(row, col)` step of the direction.
    #[inline]
    pub fn delta(self) -> Coordinate {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// # Returns
    ///
    /// The direction pointing the other way.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether the direction runs along a row (left or right).
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) `steps` cells away from `(row, col)` in this direction.
    /// Saturates at the limits of [isize], which are never on the board.
    #[inline]
    pub fn step((row, col): Coordinate, direction: Direction, steps: isize) -> Coordinate {
        let (delta_row, delta_col) = direction.delta();
        (
            row.saturating_add(delta_row.saturating_mul(steps)),
            col.saturating_add(delta_col.saturating_mul(steps)),
        )
    }
}

impl FromStr for Direction {
    type Err = InputError;

    /// Parses `u`/`up`, `d`/`down`, `l`/`left`, or `r`/`right`, ignoring case and
    /// surrounding whitespace.
    fn from_str(token: &str) -> Result<Direction, InputError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            _ => Err(InputError::UnknownDirection {
                token: token.to_owned(),
            }),
        }
    }
}
