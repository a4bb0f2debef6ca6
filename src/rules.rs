use crate::{Color, Tile, GREEN_WILDCARD};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Rule options held by a [grid](crate::Grid).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rules {
    /// Replays the legacy check where an existing [green](Color::Green) tile is treated as
    /// matching the color of any tile placed next to it with a different shape. The check is
    /// asymmetric: only the color of the tile already on the board is considered. Off unless
    /// a save or an older ruleset depends on it.
    pub green_wildcard: bool,
}

impl Default for Rules {
    fn default() -> Rules {
        Rules {
            green_wildcard: GREEN_WILDCARD,
        }
    }
}

impl Rules {
    /// Whether `placed` may share a line with `existing`.
    ///
    /// With default rules this is [Tile::shares_one_trait], which is symmetric. With
    /// [green_wildcard](Rules::green_wildcard) set, `existing` being green also counts
    /// as a shared color whenever the shapes differ.
    #[inline]
    pub fn compatible(self, placed: Tile, existing: Tile) -> bool {
        if !self.green_wildcard {
            return placed.shares_one_trait(existing);
        }
        let same_shape = placed.shape == existing.shape;
        let same_color =
            placed.color == existing.color || (existing.color == Color::Green && !same_shape);
        same_shape ^ same_color
    }

    /// Whether `first` and `second` may share a line in either order. Same as
    /// [Rules::compatible] unless [green_wildcard](Rules::green_wildcard) is set.
    #[inline]
    pub fn matches(self, first: Tile, second: Tile) -> bool {
        self.compatible(first, second) || self.compatible(second, first)
    }

    /// Whether every pair of `tiles` [matches](Rules::matches).
    pub fn pairwise_compatible(self, tiles: &[Tile]) -> bool {
        tiles
            .iter()
            .tuple_combinations()
            .all(|(&first, &second)| self.matches(first, second))
    }
}
