use crate::{Game, GameStatus, LAST_TILE_BONUS, PLAYER_CAPACITY};
use smallvec::SmallVec;
use tracing::info;

/// A vector of indexes of the players sharing the top score.
pub type Winners = SmallVec<[usize; PLAYER_CAPACITY]>;

impl Game {
    /// Checks whether the game has ended. The game ends once the bag is empty and either some
    /// player's hand is empty or no player can legally move. The first player found with an
    /// empty hand earns the [last tile bonus](LAST_TILE_BONUS), at most once per game.
    ///
    /// Once this returns `true`, the game is [over](GameStatus::Over) for good and every
    /// following call returns `true` without changing anything.
    pub fn is_over(&mut self) -> bool {
        if self.status == GameStatus::Over {
            return true;
        }
        if !self.bag.is_empty() {
            return false;
        }

        let emptied = self
            .players
            .iter()
            .position(|player| player.hand().is_empty());
        if emptied.is_none()
            && self
                .players
                .iter()
                .any(|player| self.grid.has_any_legal_move(player.hand()))
        {
            return false;
        }

        if let Some(index) = emptied {
            if !self.bonus_awarded {
                self.players[index].add_score(LAST_TILE_BONUS);
                self.bonus_awarded = true;
            }
        }
        self.status = GameStatus::Over;
        info!(
            winners = ?self.winners(),
            scores = ?self.players.iter().map(|player| player.score()).collect::<Vec<_>>(),
            "game over"
        );

        true
    }

    /// Finds every player holding the highest score. Ties are not broken, so all of the tied
    /// players are returned.
    ///
    /// # Returns
    ///
    /// The indexes of the players with the highest score in seat order.
    pub fn winners(&self) -> Winners {
        let Some(top) = self.players.iter().map(|player| player.score()).max() else {
            return Winners::new();
        };

        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.score() == top)
            .map(|(index, _)| index)
            .collect()
    }

    /// # Returns
    ///
    /// The index of the player with the strictly highest score, or [None] on a tie.
    pub fn winner(&self) -> Option<usize> {
        match self.winners().as_slice() {
            &[winner] => Some(winner),
            _ => None,
        }
    }
}
