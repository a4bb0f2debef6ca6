use crate::{Bag, InputError, Tile, HAND_LEN};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

/// A vector of [tiles](Tile) for one player. Holds at most [HAND_LEN] tiles after
/// a [refill](Player::refill).
pub type Hand = SmallVec<[Tile; HAND_LEN]>;

/// One seat at the table: a display name, a cumulative score, and a private [hand](Hand).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// The name shown to the other players.
    name: String,
    /// The points earned so far.
    score: usize,
    /// The tiles only this player can see.
    hand: Hand,
}

impl Player {
    /// # Returns
    ///
    /// A [`Player`] named `name` with no points and an empty hand.
    pub fn new(name: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            score: 0,
            hand: Hand::new(),
        }
    }

    /// The name shown to the other players.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The points earned so far.
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// The tiles held by the player, in the order they are indexed by [moves](crate::Move).
    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Draws `HAND_LEN - hand.len()` [tiles](Tile) from `bag` into the hand. Does nothing
    /// when the hand is already full or `bag` is empty.
    ///
    /// # Returns
    ///
    /// The number of [tiles](Tile) drawn.
    pub fn refill(&mut self, bag: &mut Bag) -> usize {
        let missing = HAND_LEN.saturating_sub(self.hand.len());
        if missing == 0 || bag.is_empty() {
            return 0;
        }
        let drawn = bag.draw(missing);
        let drawn_len = drawn.len();
        self.hand.extend(drawn);
        debug!(player = %self.name, drawn = drawn_len, "refilled hand");
        drawn_len
    }

    /// Removes one physical copy from the hand for every tile in `tiles`. When some copy is
    /// not held, the hand is left unchanged.
    ///
    /// # Errors
    ///
    /// * [InputError::TileNotInHand] When `tiles` holds more copies of a [tile](Tile) than
    /// the hand does.
    pub fn remove(&mut self, tiles: &[Tile]) -> Result<(), InputError> {
        let mut hand = self.hand.clone();
        for &tile in tiles {
            let Some(index) = hand.iter().position(|&held| held == tile) else {
                return Err(InputError::TileNotInHand { tile });
            };
            hand.remove(index);
        }
        self.hand = hand;
        Ok(())
    }

    /// Adds `points` to the score.
    #[inline]
    pub fn add_score(&mut self, points: usize) {
        self.score += points;
    }

    /// A mutable reference to the hand, used to build fixtures.
    #[cfg(test)]
    pub fn mut_hand(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
