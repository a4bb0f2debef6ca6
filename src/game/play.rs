use crate::{
    Coordinate, Direction, Game, GameStatus, Hand, RuleViolation, Tile, TileAtPosition, HAND_LEN,
};
use bimap::BiHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::info;

/// A candidate move for the current player, naming [tiles](Tile) by their index in the
/// player's [hand](Hand).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Opens the game with a line from the centre of the board.
    ///
    /// # See Also
    ///
    /// * [Grid::first_add](crate::Grid::first_add)
    First {
        /// The [direction](Direction) the line grows in.
        direction: Direction,
        /// The hand indexes in the order the [tiles](Tile) are laid.
        indexes: Vec<usize>,
    },
    /// Places one [tile](Tile).
    ///
    /// # See Also
    ///
    /// * [Grid::add](crate::Grid::add)
    Single {
        /// The row of the cell.
        row: isize,
        /// The column of the cell.
        col: isize,
        /// The hand index of the [tile](Tile).
        index: usize,
    },
    /// Places [tiles](Tile) one after another from `(row, col)` in `direction`.
    ///
    /// # See Also
    ///
    /// * [Grid::add_line](crate::Grid::add_line)
    Line {
        /// The row of the anchor.
        row: isize,
        /// The column of the anchor.
        col: isize,
        /// The [direction](Direction) the line grows in.
        direction: Direction,
        /// The hand indexes in the order the [tiles](Tile) are laid.
        indexes: Vec<usize>,
    },
    /// Places each [tile](Tile) at its own cell on one row or one column. The first entry is
    /// the anchor.
    ///
    /// # See Also
    ///
    /// * [Grid::add_scattered](crate::Grid::add_scattered)
    Scattered(Vec<(isize, isize, usize)>),
}

impl Move {
    /// # Returns
    ///
    /// The hand indexes used by the move in the order they were given.
    pub fn indexes(&self) -> SmallVec<[usize; HAND_LEN]> {
        match self {
            Move::First { indexes, .. } | Move::Line { indexes, .. } => {
                indexes.iter().copied().collect()
            }
            Move::Single { index, .. } => SmallVec::from_elem(*index, 1),
            Move::Scattered(placements) => {
                placements.iter().map(|&(_, _, index)| index).collect()
            }
        }
    }
}

/// Describes a malformed move, detected before the [grid](crate::Grid) is touched.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum InputError {
    /// Attempting [to play](Game::play) no [tiles](Tile).
    #[error("no tiles were chosen")]
    EmptyMove,
    /// Attempting [to play](Game::play) an index outside the hand.
    #[error("there is no tile {index} in a hand of {hand_len} tiles")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of [tiles](Tile) in the hand.
        hand_len: usize,
    },
    /// Attempting [to play](Game::play) the same index twice.
    #[error("the tile {index} was chosen more than once")]
    DuplicateIndex {
        /// The repeated index.
        index: usize,
    },
    /// Attempting to parse a token which is not a [direction](Direction).
    #[error("{token:?} is not a direction, expected u, d, l, or r")]
    UnknownDirection {
        /// The token as it was given.
        token: String,
    },
    /// Attempting to remove a [tile](Tile) from a [hand](Hand) which does not hold it.
    #[error("the hand holds no {tile}")]
    TileNotInHand {
        /// The missing [tile](Tile).
        tile: Tile,
    },
}

/// Describes the reason why [a move](Game::play) or [a pass](Game::pass_turn) was rejected.
/// The game is left exactly as it was, and the same player may try again.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum PlayError {
    /// The move was malformed.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    /// The move broke a placement rule.
    #[error("illegal move: {0}")]
    Rule(#[from] RuleViolation),
    /// Attempting to act once the game is [over](GameStatus::Over).
    #[error("the game is over")]
    GameOver,
    /// Attempting anything but [an opening move](Move::First) before the game has started.
    #[error("the game must be opened with a first move")]
    FirstMovePending,
}

impl Game {
    /// Checks `play` against the current player's hand, places its [tiles](Tile) on the
    /// [grid](crate::Grid), then removes the [tiles](Tile) from the hand, adds the points
    /// to the player, and refills the hand from the bag. The turn does not advance.
    ///
    /// # Errors
    ///
    /// * [PlayError::GameOver] When the game is [over](GameStatus::Over).
    /// * [PlayError::FirstMovePending] When the game has not started and `play` is not
    /// [Move::First].
    /// * [PlayError::Input] When the indexes of `play` are empty, out of range, or repeated.
    /// * [PlayError::Rule] When the [grid](crate::Grid) rejects the placement.
    ///
    /// # Returns
    ///
    /// The points earned by the move.
    pub fn play(&mut self, play: &Move) -> Result<usize, PlayError> {
        match (self.status, play) {
            (GameStatus::Over, _) => return Err(PlayError::GameOver),
            (GameStatus::NotStarted, Move::First { .. }) | (GameStatus::InProgress, _) => {}
            (GameStatus::NotStarted, _) => return Err(PlayError::FirstMovePending),
        }

        let mut player = self.players[self.current_player].clone();
        let tiles = resolve_indexes(player.hand(), &play.indexes())?;
        player.remove(&tiles)?;

        let points = match play {
            Move::First { direction, .. } => self.grid.first_add(*direction, &tiles)?,
            Move::Single { row, col, .. } => {
                let &[tile] = tiles.as_slice() else {
                    unreachable!("a single move should resolve to exactly one tile.");
                };
                self.grid.add(*row, *col, tile)?
            }
            Move::Line {
                row,
                col,
                direction,
                ..
            } => self.grid.add_line(*row, *col, *direction, &tiles)?,
            Move::Scattered(placements) => {
                check_scattered(placements)?;
                let placements: Vec<TileAtPosition> = placements
                    .iter()
                    .zip(&tiles)
                    .map(|(&(row, col, _), &tile)| TileAtPosition::new(row, col, tile))
                    .collect();
                self.grid.add_scattered(&placements)?
            }
        };

        player.add_score(points);
        player.refill(&mut self.bag);
        info!(
            player = %player.name(),
            placed = tiles.len(),
            points,
            score = player.score(),
            "committed move"
        );
        self.players[self.current_player] = player;
        self.status = GameStatus::InProgress;

        Ok(points)
    }

    /// Advances the turn to the next player, wrapping back to the first player after the last.
    ///
    /// # Errors
    ///
    /// * [PlayError::FirstMovePending] When the game has not started.
    /// * [PlayError::GameOver] When the game is [over](GameStatus::Over).
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is now.
    pub fn pass_turn(&mut self) -> Result<usize, PlayError> {
        match self.status {
            GameStatus::NotStarted => return Err(PlayError::FirstMovePending),
            GameStatus::Over => return Err(PlayError::GameOver),
            GameStatus::InProgress => {}
        }

        self.current_player = (self.current_player + 1) % self.players.len();
        info!(
            current_player = self.current_player,
            player = %self.players[self.current_player].name(),
            "passed turn"
        );

        Ok(self.current_player)
    }
}

/// Maps hand `indexes` to the [tiles](Tile) of `hand`.
///
/// # Errors
///
/// * [InputError::EmptyMove] When `indexes` is empty.
/// * [InputError::IndexOutOfRange] For the first index not in `0..hand.len()`.
/// * [InputError::DuplicateIndex] For the first index given twice.
fn resolve_indexes(hand: &Hand, indexes: &[usize]) -> Result<Vec<Tile>, InputError> {
    if indexes.is_empty() {
        return Err(InputError::EmptyMove);
    }
    if let Some(&index) = indexes.iter().find(|&&index| index >= hand.len()) {
        return Err(InputError::IndexOutOfRange {
            index,
            hand_len: hand.len(),
        });
    }
    if let Some(&index) = indexes.iter().duplicates().next() {
        return Err(InputError::DuplicateIndex { index });
    }

    Ok(indexes.iter().map(|&index| hand[index]).collect())
}

/// Pairs each hand index of a scattered move with its [coordinate](Coordinate), rejecting
/// any index or position used twice.
fn check_scattered(placements: &[(isize, isize, usize)]) -> Result<(), PlayError> {
    let mut plays: BiHashMap<usize, Coordinate> = BiHashMap::with_capacity(placements.len());
    for &(row, col, index) in placements {
        if plays.insert_no_overwrite(index, (row, col)).is_err() {
            return Err(if plays.contains_left(&index) {
                InputError::DuplicateIndex { index }.into()
            } else {
                RuleViolation::DuplicatePosition {
                    coordinate: (row, col),
                }
                .into()
            });
        }
    }
    Ok(())
}
