use crate::{Game, GameStatus, Grid, Hand, PLAYER_CAPACITY};
use smallvec::SmallVec;

/// A vector of scores for each player.
pub type Scores = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of hand lengths for each player.
pub type HandLens = SmallVec<[usize; PLAYER_CAPACITY]>;

/// Immutably borrows what every player may see of a [`Game`].
#[derive(Debug)]
pub struct GameView<'a> {
    /// The board.
    pub grid: &'a Grid,
    /// The smallest rectangle holding every occupied cell as the minimum row, minimum column,
    /// maximum row, and maximum column, or [None] before the first move.
    pub bounds: Option<(isize, isize, isize, isize)>,
    /// The names of the players in seat order.
    pub names: Vec<&'a str>,
    /// The score of each player.
    pub scores: Scores,
    /// The number of [tiles](crate::Tile) in each hand.
    pub hand_lens: HandLens,
    /// The number of [tiles](crate::Tile) that haven't been drawn yet.
    pub bag_len: usize,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The phase of the game.
    pub status: GameStatus,
}

impl<'a> Game {
    /// # Returns
    ///
    /// A new [`GameView`], which immutably borrows the board from [`Game`], but with
    /// the bag replaced by its length and each hand replaced by its length.
    pub fn view(&'a self) -> GameView<'a> {
        GameView {
            grid: &self.grid,
            bounds: self.grid.bounds(),
            names: self.players.iter().map(|player| player.name()).collect(),
            scores: self.players.iter().map(|player| player.score()).collect(),
            hand_lens: self.players.iter().map(|player| player.hand().len()).collect(),
            bag_len: self.bag.remaining_count(),
            current_player: self.current_player,
            status: self.status,
        }
    }

    /// # Returns
    ///
    /// The [tiles](crate::Tile) held by the requesting player or [None] if out of bounds.
    pub fn get_hand(&self, index: usize) -> Option<&Hand> {
        self.players.get(index).map(|player| player.hand())
    }
}
