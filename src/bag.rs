use crate::{tiles, Tile, TILE_COPIES};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
///
/// One bag belongs to exactly one [game](crate::Game). Every draw is uniform over the
/// remaining tiles, without replacement, and cannot be undone. The random number generator
/// lives inside the bag so that a [snapshot](crate::GameSnapshot) of the bag resumes the same
/// sequence of draws.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bag {
    /// The remaining [tiles](Tile) in no particular order.
    tiles: Vec<Tile>,
    /// Chooses which remaining [tile](Tile) is drawn next.
    rng: ChaCha8Rng,
}

impl Bag {
    /// Creates a bag of [TILE_COPIES] copies of every [tile](Tile) variant seeded
    /// from the thread's random number generator.
    ///
    /// # See Also
    ///
    /// * [Bag::seeded]
    pub fn new() -> Bag {
        Bag::seeded(rand::thread_rng().gen())
    }

    /// Creates a bag of [TILE_COPIES] copies of every [tile](Tile) variant where draws
    /// are decided by `seed`. The same seed always draws the same [tiles](Tile).
    pub fn seeded(seed: u64) -> Bag {
        let tiles = tiles()
            .into_iter()
            .flat_map(|tile| [tile; TILE_COPIES])
            .collect();
        Bag::from_tiles(tiles, seed)
    }

    /// Creates a bag holding exactly `tiles` where draws are decided by `seed`.
    pub fn from_tiles(tiles: Vec<Tile>, seed: u64) -> Bag {
        Bag {
            tiles,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Removes and returns up to `n` [tiles](Tile) chosen uniformly at random.
    /// When fewer than `n` [tiles](Tile) remain, every remaining [tile](Tile) is returned,
    /// and when the bag is empty, nothing is returned.
    pub fn draw(&mut self, n: usize) -> Vec<Tile> {
        let n = n.min(self.tiles.len());
        let drawn: Vec<Tile> = (0..n)
            .map(|_| {
                let index = self.rng.gen_range(0..self.tiles.len());
                self.tiles.swap_remove(index)
            })
            .collect();
        debug!(
            drawn = drawn.len(),
            remaining = self.tiles.len(),
            "drew tiles from bag"
        );
        drawn
    }

    /// # Returns
    ///
    /// The number of [tiles](Tile) that haven't been drawn yet.
    #[inline]
    pub fn remaining_count(&self) -> usize {
        self.tiles.len()
    }

    /// Whether every [tile](Tile) has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// # Returns
    ///
    /// The [tiles](Tile) that haven't been drawn yet, in no particular order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Default for Bag {
    fn default() -> Bag {
        Bag::new()
    }
}

/// Whether `bag` could be a fresh bag: [BAG_LEN](crate::BAG_LEN) tiles with [TILE_COPIES]
/// of each variant.
#[cfg(test)]
pub fn is_full_bag(bag: &Bag) -> bool {
    use itertools::Itertools;

    bag.remaining_count() == crate::BAG_LEN
        && bag
            .tiles()
            .iter()
            .counts()
            .values()
            .all(|&count| count == TILE_COPIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BAG_LEN, TILES_LEN};
    use itertools::Itertools;

    #[test]
    fn new_is_full() {
        let bag = Bag::new();

        assert_eq!(108, BAG_LEN);
        assert!(is_full_bag(&bag));
        assert_eq!(TILES_LEN, bag.tiles().iter().unique().count());
    }

    #[test]
    fn draw_removes_tiles() {
        let mut bag = Bag::seeded(7);

        let drawn = bag.draw(6);

        assert_eq!(6, drawn.len());
        assert_eq!(BAG_LEN - 6, bag.remaining_count());
        let counts = bag.tiles().iter().counts();
        for tile in &drawn {
            assert!(counts.get(tile).copied().unwrap_or(0) < TILE_COPIES);
        }
    }

    #[test]
    fn draw_more_than_remaining() {
        let mut bag = Bag::seeded(11);
        bag.draw(BAG_LEN - 4);

        let drawn = bag.draw(6);

        assert_eq!(4, drawn.len());
        assert!(bag.is_empty());
    }

    #[test]
    fn draw_from_empty() {
        let mut bag = Bag::from_tiles(Vec::new(), 0);

        assert!(bag.draw(6).is_empty());
        assert_eq!(0, bag.remaining_count());
    }

    #[test]
    fn draw_zero() {
        let mut bag = Bag::seeded(3);

        assert!(bag.draw(0).is_empty());
        assert_eq!(BAG_LEN, bag.remaining_count());
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let mut first = Bag::seeded(42);
        let mut second = Bag::seeded(42);

        for _ in 0..10 {
            assert_eq!(first.draw(5), second.draw(5));
        }
    }

    #[test]
    fn draw_everything_conserves_tiles() {
        let mut bag = Bag::seeded(99);

        let mut drawn = Vec::new();
        while !bag.is_empty() {
            drawn.extend(bag.draw(6));
        }

        assert_eq!(BAG_LEN, drawn.len());
        assert!(is_full_bag(&Bag::from_tiles(drawn, 0)));
    }
}
