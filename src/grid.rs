use crate::{find_component_minimums_and_maximums, Coordinate, Direction, Rules, Tile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::warn;

pub use score::*;

mod placement;
mod score;
mod search;

/// The board: every [tile](Tile) placed so far keyed by its [coordinate](Coordinate).
///
/// The board is the square `-BOARD_RADIUS..=BOARD_RADIUS` on both axes with its centre at
/// the origin. Only occupied cells are stored. The grid is the only owner of placed tiles and
/// enforces every placement rule, so a move is either committed in full or not at all.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// This is a map of coordinates to tiles that have been placed.
    tiles: BTreeMap<Coordinate, Tile>,
    /// The options used to decide whether two tiles may share a line.
    rules: Rules,
}

/// A [tile](Tile) to be placed at a [coordinate](Coordinate), used by
/// [scattered placements](Grid::add_scattered).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TileAtPosition {
    /// The row of the cell.
    pub row: isize,
    /// The column of the cell.
    pub col: isize,
    /// The tile to place.
    pub tile: Tile,
}

impl TileAtPosition {
    /// # Returns
    ///
    /// A [`TileAtPosition`] placing `tile` at `(row, col)`.
    #[inline]
    pub const fn new(row: isize, col: isize, tile: Tile) -> TileAtPosition {
        TileAtPosition { row, col, tile }
    }

    /// The [coordinate](Coordinate) of the cell.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        (self.row, self.col)
    }
}

/// Describes the reason why a placement was rejected by the [grid](Grid). The grid is left
/// exactly as it was before the rejected call.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum RuleViolation {
    /// Attempting to place a [tile](Tile) outside the board.
    #[error("the position {coordinate:?} is not on the grid")]
    OutOfBounds {
        /// The offending [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to place a [tile](Tile) on an occupied cell.
    #[error("the position {coordinate:?} is already occupied by a tile")]
    Occupied {
        /// The offending [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to place a [tile](Tile) in a line already holding the same tile.
    #[error("the same tile ({tile}) would appear twice on the line through {coordinate:?}")]
    DuplicateInLine {
        /// The offending [coordinate](Coordinate).
        coordinate: Coordinate,
        /// The duplicated [tile](Tile).
        tile: Tile,
    },
    /// Attempting to place a [tile](Tile) with no occupied neighbor.
    #[error("no tile is next to the position {coordinate:?}")]
    NotConnected {
        /// The offending [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to place a [tile](Tile) in a line with a tile it does not share
    /// exactly one trait with.
    #[error("{placed} at {coordinate:?} does not match {existing} on the same line")]
    Incompatible {
        /// The offending [coordinate](Coordinate).
        coordinate: Coordinate,
        /// The [tile](Tile) being placed.
        placed: Tile,
        /// The [tile](Tile) already on the line.
        existing: Tile,
    },
    /// Attempting to join two lines holding [tiles](Tile) that do not match each other.
    #[error("{first} and {second} would share the line through {coordinate:?} but do not match")]
    MixedLine {
        /// The [coordinate](Coordinate) joining the lines.
        coordinate: Coordinate,
        /// Some [tile](Tile) on the joined line.
        first: Tile,
        /// Some later [tile](Tile) on the joined line not matching `first`.
        second: Tile,
    },
    /// Attempting the first move on a grid that already holds [tiles](Tile).
    #[error("the grid is not empty")]
    GridNotEmpty,
    /// Attempting to place [tiles](Tile) that do not all match each other.
    #[error("the tiles do not match each other: each pair must share either the shape or the color but not both")]
    TilesNotCompatible,
    /// Attempting to scatter [tiles](Tile) that are not on a single row or a single column.
    #[error("each tile must be on the same row or on the same column")]
    NotOnOneLine,
    /// Attempting to scatter two [tiles](Tile) onto the same cell.
    #[error("the position {coordinate:?} was given more than once")]
    DuplicatePosition {
        /// The repeated [coordinate](Coordinate).
        coordinate: Coordinate,
    },
    /// Attempting to scatter [tiles](Tile) that leave an empty cell between them.
    #[error("the tiles leave a gap at {gap:?}")]
    NotContiguous {
        /// The first empty [coordinate](Coordinate) between the placed tiles.
        gap: Coordinate,
    },
    /// Attempting to place no [tiles](Tile).
    #[error("no tiles were given")]
    EmptyLine,
}

impl Grid {
    /// # Returns
    ///
    /// An empty [`Grid`] with [default rules](Rules::default).
    pub fn new() -> Grid {
        Grid::with_rules(Rules::default())
    }

    /// # Returns
    ///
    /// An empty [`Grid`] using `rules`.
    pub fn with_rules(rules: Rules) -> Grid {
        Grid {
            tiles: BTreeMap::new(),
            rules,
        }
    }

    /// # Returns
    ///
    /// The [tile](Tile) at `(row, col)`, or [None] when the cell is empty or off the board.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> Option<Tile> {
        self.tiles.get(&(row, col)).copied()
    }

    /// Whether no [tile](Tile) has been placed, which is the case until the first move.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// # Returns
    ///
    /// The number of occupied cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// The options used to decide whether two [tiles](Tile) may share a line.
    #[inline]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// # Returns
    ///
    /// Every occupied cell in row then column order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        self.tiles.iter().map(|(&coordinate, &tile)| (coordinate, tile))
    }

    /// Finds the smallest rectangle holding every occupied cell. If the grid is empty,
    /// [None] is returned.
    ///
    /// # Returns
    ///
    /// The minimum row, minimum column, maximum row, and maximum column in that order.
    pub fn bounds(&self) -> Option<(isize, isize, isize, isize)> {
        find_component_minimums_and_maximums(self.tiles.keys().copied())
    }

    /// Walks away from `from` in `direction` for as long as cells are occupied.
    ///
    /// # Returns
    ///
    /// The occupied cells, nearest first, not including `from`.
    fn walk(
        &self,
        from: Coordinate,
        direction: Direction,
    ) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        (1..)
            .map(move |steps| Direction::step(from, direction, steps))
            .map_while(move |coordinate| {
                self.tiles
                    .get(&coordinate)
                    .map(|&tile| (coordinate, tile))
            })
    }

    /// # Returns
    ///
    /// The [tiles](Tile) on both sides of `coordinate` along a row when `horizontal`
    /// or along a column otherwise, in board order, not including `coordinate` itself.
    fn neighbors_in_line(
        &self,
        coordinate: Coordinate,
        horizontal: bool,
    ) -> (Vec<Tile>, Vec<Tile>) {
        let (before, after) = if horizontal {
            (Direction::Left, Direction::Right)
        } else {
            (Direction::Up, Direction::Down)
        };
        let mut before_tiles: Vec<Tile> =
            self.walk(coordinate, before).map(|(_, tile)| tile).collect();
        before_tiles.reverse();
        let after_tiles = self.walk(coordinate, after).map(|(_, tile)| tile).collect();
        (before_tiles, after_tiles)
    }

    /// Runs `placement` against the grid, and if it fails, puts back every tile the grid held
    /// before the call.
    fn transaction<T>(
        &mut self,
        placement: impl FnOnce(&mut Grid) -> Result<T, RuleViolation>,
    ) -> Result<T, RuleViolation> {
        let saved = self.tiles.clone();
        placement(self).map_err(|violation| {
            warn!(
                rolled_back = self.tiles.len() - saved.len(),
                %violation,
                "placement rejected, restoring grid"
            );
            self.tiles = saved;
            violation
        })
    }

    /// A mutable reference to `self.tiles`.
    #[cfg(test)]
    pub fn mut_tiles(&mut self) -> &mut BTreeMap<Coordinate, Tile> {
        &mut self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Shape};
    use map_macro::btree_map;

    const RED_ROUND: Tile = Tile::new(Color::Red, Shape::Round);
    const RED_DIAMOND: Tile = Tile::new(Color::Red, Shape::Diamond);
    const RED_PLUS: Tile = Tile::new(Color::Red, Shape::Plus);

    #[test]
    fn new_is_empty() {
        let grid = Grid::new();

        assert!(grid.is_empty());
        assert_eq!(0, grid.len());
        assert!(grid.bounds().is_none());
    }

    #[test]
    fn get_outside_board_is_none() {
        let grid = Grid::new();

        assert!(grid.get(-250, 500).is_none());
        assert!(grid.get(isize::MIN, isize::MAX).is_none());
    }

    #[test]
    fn bounds_and_tiles() {
        let mut grid = Grid::new();
        *grid.mut_tiles() = btree_map! {
            (0, 0) => RED_ROUND,
            (-1, 0) => RED_DIAMOND,
            (-1, 1) => RED_PLUS,
        };

        assert_eq!(Some((-1, 0, 0, 1)), grid.bounds());
        assert_eq!(Some(RED_PLUS), grid.get(-1, 1));
        assert_eq!(
            vec![((-1, 0), RED_DIAMOND), ((-1, 1), RED_PLUS), ((0, 0), RED_ROUND)],
            grid.tiles().collect::<Vec<_>>()
        );
    }

    #[test]
    fn walk_stops_at_gap() {
        let mut grid = Grid::new();
        *grid.mut_tiles() = btree_map! {
            (0, 1) => RED_ROUND,
            (0, 2) => RED_DIAMOND,
            (0, 4) => RED_PLUS,
        };

        let walked: Vec<_> = grid.walk((0, 0), Direction::Right).collect();

        assert_eq!(vec![((0, 1), RED_ROUND), ((0, 2), RED_DIAMOND)], walked);
    }

    #[test]
    fn neighbors_in_line_board_order() {
        let mut grid = Grid::new();
        *grid.mut_tiles() = btree_map! {
            (-2, 0) => RED_ROUND,
            (-1, 0) => RED_DIAMOND,
            (1, 0) => RED_PLUS,
        };

        let (before, after) = grid.neighbors_in_line((0, 0), false);

        assert_eq!(vec![RED_ROUND, RED_DIAMOND], before);
        assert_eq!(vec![RED_PLUS], after);
    }

    #[test]
    fn transaction_restores_on_error() {
        let mut grid = Grid::new();
        *grid.mut_tiles() = btree_map! { (0, 0) => RED_ROUND };
        let before = grid.clone();

        let result: Result<(), RuleViolation> = grid.transaction(|grid| {
            grid.tiles.insert((0, 1), RED_DIAMOND);
            Err(RuleViolation::EmptyLine)
        });

        assert_eq!(Err(RuleViolation::EmptyLine), result);
        assert_eq!(before, grid);
    }

    #[test]
    fn transaction_keeps_on_success() {
        let mut grid = Grid::new();

        let result = grid.transaction(|grid| {
            grid.tiles.insert((0, 0), RED_ROUND);
            Ok(1)
        });

        assert_eq!(Ok(1), result);
        assert_eq!(1, grid.len());
    }

    #[test]
    fn violation_messages() {
        assert_eq!(
            "the position (3, 4) is already occupied by a tile",
            RuleViolation::Occupied { coordinate: (3, 4) }.to_string()
        );
        assert_eq!("the grid is not empty", RuleViolation::GridNotEmpty.to_string());
    }
}
