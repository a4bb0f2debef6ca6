use crate::{adjacent_coordinates, is_on_board, Coordinate, Grid, Tile, CENTER};
use either::Either;
use itertools::Itertools;
use std::iter;

impl Grid {
    /// Whether some [tile](Tile) of `hand` could be [added](Grid::add) somewhere on the board.
    /// Before the first move, any [tile](Tile) can open the game at the [centre](CENTER).
    /// Never changes the board.
    ///
    /// # See Also
    ///
    /// * [Game::is_over](crate::Game::is_over)
    pub fn has_any_legal_move(&self, hand: &[Tile]) -> bool {
        if hand.is_empty() {
            return false;
        }
        if self.is_empty() {
            return true;
        }

        self.frontier().any(|coordinate| {
            hand.iter()
                .any(|&tile| self.check_placement(coordinate, tile).is_ok())
        })
    }

    /// # Returns
    ///
    /// Every empty cell on the board next to an occupied cell, or just the [centre](CENTER)
    /// when the board is empty.
    pub fn frontier(&self) -> impl Iterator<Item = Coordinate> + '_ {
        if self.is_empty() {
            Either::Left(iter::once(CENTER))
        } else {
            Either::Right(
                self.tiles
                    .keys()
                    .flat_map(|&coordinate| adjacent_coordinates(coordinate))
                    .filter(move |coordinate| {
                        is_on_board(*coordinate) && !self.tiles.contains_key(coordinate)
                    })
                    .unique(),
            )
        }
    }
}
