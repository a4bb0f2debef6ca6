use crate::{Coordinate, Direction, Grid, QWIRKLE_LEN, QWIRKLE_POINTS};
use itertools::Itertools;

/// The points earned by a line of `len` [tiles](crate::Tile). A complete line of
/// [QWIRKLE_LEN] earns [QWIRKLE_POINTS] instead.
#[inline]
pub fn line_points(len: usize) -> usize {
    if len == QWIRKLE_LEN {
        QWIRKLE_POINTS
    } else {
        len
    }
}

impl Grid {
    /// Finds the points earned by the row and the column through the occupied cell
    /// `coordinate`. A line of a single [tile](crate::Tile) earns nothing, but a cell that is
    /// part of no longer line still earns `1`.
    ///
    /// # Returns
    ///
    /// The sum of the row points and the column points, or `1` if both are `0`.
    pub fn cell_points(&self, coordinate: Coordinate) -> usize {
        match self.axis_points(coordinate, true) + self.axis_points(coordinate, false) {
            0 => 1,
            points => points,
        }
    }

    /// # Returns
    ///
    /// The points of the row through `coordinate` when `horizontal` or the column otherwise,
    /// `0` when the line is shorter than `2`.
    pub(super) fn axis_points(&self, coordinate: Coordinate, horizontal: bool) -> usize {
        let (before, after) = if horizontal {
            (Direction::Left, Direction::Right)
        } else {
            (Direction::Up, Direction::Down)
        };
        let len = 1 + self.walk(coordinate, before).count() + self.walk(coordinate, after).count();

        match len {
            0 | 1 => 0,
            len => line_points(len),
        }
    }

    /// Scores a placement whose [coordinates](Coordinate) all lie on one row when
    /// `horizontal` or on one column otherwise. The first coordinate is the anchor.
    pub(super) fn run_points(&self, coordinates: &[Coordinate], horizontal: bool) -> usize {
        let Some((&anchor, rest)) = coordinates.split_first() else {
            return 0;
        };

        self.cell_points(anchor)
            + rest
                .iter()
                .unique()
                .map(|&coordinate| self.axis_points(coordinate, !horizontal))
                .sum::<usize>()
    }
}
