use crate::{Bag, Grid, Player, Rules, MAX_PLAYERS, MIN_PLAYERS, PLAYER_CAPACITY};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

pub use end::*;
pub use play::*;
pub use snapshot::*;
pub use view::*;

mod end;
mod play;
mod snapshot;
#[cfg(test)]
mod test_setup;
mod view;

/// A vector of the players in seat order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [Game::players]
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;

/// The phase of a [game](Game).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The board is empty and the current player still has to open the game.
    NotStarted,
    /// The opening line has been placed and players take turns.
    InProgress,
    /// The game has ended and no more moves are accepted.
    Over,
}

/// Owns all state of one game and sequences the players' turns. Created from [Game::new].
///
/// The [grid](Grid), the [bag](Bag), and the [players](Player) belong to exactly one game, so
/// two games never share any of them.
#[derive(Debug, Clone)]
pub struct Game {
    /// The board with every placed [tile](crate::Tile).
    grid: Grid,
    /// This is a bag of all the [tiles](crate::Tile) that haven't been drawn yet.
    bag: Bag,
    /// The players in seat order.
    players: Players,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// The phase of the game.
    status: GameStatus,
    /// Whether the [last tile bonus](crate::LAST_TILE_BONUS) has been given.
    bonus_awarded: bool,
}

/// Describes the reason why a [game](Game) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewError {
    /// Attempting [to start](Game::new) with fewer than [MIN_PLAYERS] players.
    #[error("at least {min} players are needed, {players} given", min = MIN_PLAYERS)]
    TooFewPlayers {
        /// The number of names given.
        players: usize,
    },
    /// Attempting [to start](Game::new) with more than [MAX_PLAYERS] players.
    #[error("at most {max} players can play, {players} given", max = MAX_PLAYERS)]
    TooManyPlayers {
        /// The number of names given.
        players: usize,
    },
    /// Attempting [to start](Game::new) with a blank name.
    #[error("the name of player {index} is empty")]
    EmptyName {
        /// The seat of the blank name.
        index: usize,
    },
    /// Attempting [to start](Game::new) with the same name twice.
    #[error("the name {name} is used more than once")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

impl Game {
    /// Creates a game for `names` in seat order with a fresh [bag](Bag) and
    /// [default rules](Rules::default).
    ///
    /// # Errors
    ///
    /// Every problem with `names` at once.
    ///
    /// * [NewError::TooFewPlayers] Fewer than [MIN_PLAYERS] names.
    /// * [NewError::TooManyPlayers] More than [MAX_PLAYERS] names.
    /// * [NewError::EmptyName] A blank name.
    /// * [NewError::DuplicateName] The same name twice.
    ///
    /// # See Also
    ///
    /// * [Game::new_seeded]
    /// * [Game::with_bag]
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
    ) -> Result<Game, HashSet<NewError>> {
        Game::with_bag(names, Bag::new(), Rules::default())
    }

    /// Same as [Game::new], but every draw of the game is decided by `seed`.
    pub fn new_seeded<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        seed: u64,
    ) -> Result<Game, HashSet<NewError>> {
        Game::with_bag(names, Bag::seeded(seed), Rules::default())
    }

    /// Checks `names`, then fills each player's hand from `bag` in seat order. The first
    /// player opens the game.
    ///
    /// # Arguments
    ///
    /// * `names`: The display names of the players in seat order.
    /// * `bag`: The supply of [tiles](crate::Tile) owned by the game from now on.
    /// * `rules`: The options used by the [grid](Grid).
    ///
    /// # Errors
    ///
    /// Same as [Game::new].
    pub fn with_bag<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        mut bag: Bag,
        rules: Rules,
    ) -> Result<Game, HashSet<NewError>> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut errors = HashSet::new();

        if names.len() < MIN_PLAYERS {
            errors.insert(NewError::TooFewPlayers {
                players: names.len(),
            });
        }
        if names.len() > MAX_PLAYERS {
            errors.insert(NewError::TooManyPlayers {
                players: names.len(),
            });
        }
        errors.extend(
            names
                .iter()
                .positions(|name| name.trim().is_empty())
                .map(|index| NewError::EmptyName { index }),
        );
        errors.extend(
            names
                .iter()
                .filter(|name| !name.trim().is_empty())
                .duplicates()
                .map(|name| NewError::DuplicateName { name: name.clone() }),
        );
        if !errors.is_empty() {
            return Err(errors);
        }

        let players: Players = names
            .into_iter()
            .map(|name| {
                let mut player = Player::new(name);
                player.refill(&mut bag);
                player
            })
            .collect();
        info!(
            players = players.len(),
            bag_len = bag.remaining_count(),
            "created game"
        );

        Ok(Game {
            grid: Grid::with_rules(rules),
            bag,
            players,
            current_player: 0,
            status: GameStatus::NotStarted,
            bonus_awarded: false,
        })
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The players in seat order.
    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The board.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of [tiles](crate::Tile) that haven't been drawn yet.
    #[inline]
    pub fn bag_len(&self) -> usize {
        self.bag.remaining_count()
    }

    /// The phase of the game.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Move, BAG_LEN, HAND_LEN};
    use map_macro::hash_set;
    use proptest::prelude::*;

    #[test]
    fn new_fills_hands() {
        let game = Game::new(["Sonia", "Cedric", "Elvire"]).expect("new should return Ok");

        assert_eq!(3, game.players().len());
        for player in game.players() {
            assert_eq!(HAND_LEN, player.hand().len());
            assert_eq!(0, player.score());
        }
        assert_eq!(BAG_LEN - 3 * HAND_LEN, game.bag_len());
        assert_eq!(0, game.current_player());
        assert_eq!(GameStatus::NotStarted, game.status());
        assert!(game.grid().is_empty());
    }

    #[test]
    fn new_keeps_seat_order() {
        let game = Game::new(vec![String::from("Vincent"), String::from("Sonia")])
            .expect("new should return Ok");

        assert_eq!(
            vec!["Vincent", "Sonia"],
            game.players().iter().map(Player::name).collect::<Vec<_>>()
        );
    }

    #[test]
    fn new_seeded_is_reproducible() {
        let first = Game::new_seeded(["Sonia", "Cedric"], 5).expect("new should return Ok");
        let second = Game::new_seeded(["Sonia", "Cedric"], 5).expect("new should return Ok");

        assert_eq!(first.players(), second.players());
    }

    #[test]
    fn new_too_few_players() {
        assert_eq!(
            hash_set! { NewError::TooFewPlayers { players: 1 } },
            Game::new(["Sonia"]).expect_err("new should return Err")
        );
    }

    #[test]
    fn new_too_many_players() {
        assert_eq!(
            hash_set! { NewError::TooManyPlayers { players: 5 } },
            Game::new(["A", "B", "C", "D", "E"]).expect_err("new should return Err")
        );
    }

    #[test]
    fn new_collects_every_error() {
        assert_eq!(
            hash_set! {
                NewError::EmptyName { index: 1 },
                NewError::EmptyName { index: 3 },
                NewError::DuplicateName { name: String::from("Sonia") },
            },
            Game::new(["Sonia", " ", "Sonia", ""]).expect_err("new should return Err")
        );
    }

    #[test]
    fn new_error_messages() {
        assert_eq!(
            "at least 2 players are needed, 0 given",
            NewError::TooFewPlayers { players: 0 }.to_string()
        );
    }

    fn tile_total(game: &Game) -> usize {
        game.grid().len()
            + game.bag_len()
            + game
                .players()
                .iter()
                .map(|player| player.hand().len())
                .sum::<usize>()
    }

    /// Places the first hand tile that fits on some frontier cell, or passes.
    fn greedy_turn(game: &mut Game) {
        let cells: Vec<_> = game.grid().frontier().collect();
        let hand_len = game.players()[game.current_player()].hand().len();
        let _ = cells
            .into_iter()
            .flat_map(|(row, col)| (0..hand_len).map(move |index| Move::Single { row, col, index }))
            .find(|play| game.play(play).is_ok());
        if !game.is_over() {
            game.pass_turn().expect("pass_turn should return Ok");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_tiles_are_conserved(seed in any::<u64>(), turns in 1..16usize) {
            let mut game = Game::new_seeded(["Sonia", "Cedric", "Elvire"], seed)
                .expect("new should return Ok");
            prop_assert_eq!(BAG_LEN, tile_total(&game));

            game.play(&Move::First { direction: Direction::Down, indexes: vec![0] })
                .expect("play should return Ok");
            prop_assert_eq!(BAG_LEN, tile_total(&game));
            game.pass_turn().expect("pass_turn should return Ok");

            for _ in 0..turns {
                if game.is_over() {
                    break;
                }
                greedy_turn(&mut game);
                prop_assert_eq!(BAG_LEN, tile_total(&game));
                prop_assert!(game.players().iter().all(|player| player.hand().len() <= HAND_LEN));
            }
        }
    }
}
