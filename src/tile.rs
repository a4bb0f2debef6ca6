use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The number of [`Tile`] variants. 36 tiles from 6 colors and 6 shapes.
pub const TILES_LEN: usize = Color::COLORS_LEN * Shape::SHAPES_LEN;

/// Describes a tile with [`Color`] and [`Shape`] in a game.
///
/// Two tiles with the same color and shape are interchangeable for every rule, but each copy
/// is still a separate physical piece in the [bag](crate::Bag) or a [hand](crate::Hand).
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct Tile {
    /// The color on the tile.
    pub color: Color,
    /// The shape on the tile.
    pub shape: Shape,
}

impl Tile {
    /// # Returns
    ///
    /// A [`Tile`] with `color` and `shape`.
    #[inline]
    pub const fn new(color: Color, shape: Shape) -> Tile {
        Tile { color, shape }
    }

    /// Whether `self` and `other` share exactly one trait: either the same [color](Color) or
    /// the same [shape](Shape), but not both and not neither. The relation is symmetric.
    ///
    /// # See Also
    ///
    /// * [Rules::compatible](crate::Rules::compatible)
    #[inline]
    pub fn shares_one_trait(self, other: Tile) -> bool {
        (self.color == other.color) ^ (self.shape == other.shape)
    }
}

impl From<(Color, Shape)> for Tile {
    #[inline]
    fn from((color, shape): (Color, Shape)) -> Tile {
        Tile::new(color, shape)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.shape)
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile::new(rng.gen(), rng.gen())
    }
}

/// # Returns
///
/// An array of all [`Tile`] variants in color then shape order.
#[inline]
pub fn tiles() -> [Tile; TILES_LEN] {
    let mut tiles = [Tile::new(Color::Red, Shape::Cross); TILES_LEN];
    for (index, tile) in tiles.iter_mut().enumerate() {
        *tile = Tile::new(
            Color::colors()[index / Shape::SHAPES_LEN],
            Shape::shapes()[index % Shape::SHAPES_LEN],
        );
    }
    tiles
}

/// Describes the color on a [`Tile`].
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
pub enum Color {
    /// `0`.
    Red = 0,
    /// `1`.
    Orange = 1,
    /// `2`.
    Yellow = 2,
    /// `3`.
    Green = 3,
    /// `4`.
    Blue = 4,
    /// `5`.
    Purple = 5,
}

impl Color {
    /// The number of [`Color`] variants. 6 colors.
    pub const COLORS_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [
            Color::Red,
            Color::Orange,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Purple,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
        })
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.gen_range(0..Color::COLORS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..Color::COLORS_LEN (0..{:?}).",
                index,
                Color::COLORS_LEN
            );
        })
    }
}

/// Describes the shape on a [`Tile`].
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    FromPrimitive,
    Serialize,
    Deserialize,
)]
pub enum Shape {
    /// `0`.
    Cross = 0,
    /// `1`.
    Square = 1,
    /// `2`.
    Round = 2,
    /// `3`.
    Star = 3,
    /// `4`.
    Plus = 4,
    /// `5`.
    Diamond = 5,
}

impl Shape {
    /// The number of [`Shape`] variants. 6 shapes.
    pub const SHAPES_LEN: usize = 6;

    /// # Returns
    ///
    /// An array of all [`Shape`] variants in order.
    #[inline]
    pub fn shapes() -> [Shape; Shape::SHAPES_LEN] {
        [
            Shape::Cross,
            Shape::Square,
            Shape::Round,
            Shape::Star,
            Shape::Plus,
            Shape::Diamond,
        ]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Cross => "cross",
            Shape::Square => "square",
            Shape::Round => "round",
            Shape::Star => "star",
            Shape::Plus => "plus",
            Shape::Diamond => "diamond",
        })
    }
}

impl Distribution<Shape> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        let index = rng.gen_range(0..Shape::SHAPES_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since shapes cover all indexes \
                in range 0..Shape::SHAPES_LEN (0..{:?}).",
                index,
                Shape::SHAPES_LEN
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use proptest::prelude::*;

    #[test]
    fn tiles_len() {
        assert_eq!(TILES_LEN, Color::COLORS_LEN * Shape::SHAPES_LEN);
        assert_eq!(TILES_LEN, tiles().len());
    }

    #[test]
    fn tiles_no_duplicates() {
        assert_eq!(0, tiles().into_iter().duplicates().count());
    }

    #[test]
    fn tiles_color_then_shape_order() {
        let tiles = tiles();
        assert_eq!(Tile::new(Color::Red, Shape::Cross), tiles[0]);
        assert_eq!(Tile::new(Color::Red, Shape::Diamond), tiles[5]);
        assert_eq!(Tile::new(Color::Orange, Shape::Cross), tiles[6]);
        assert_eq!(Tile::new(Color::Purple, Shape::Diamond), tiles[TILES_LEN - 1]);
    }

    #[test]
    fn color_as_usize() {
        for (index, color) in Color::colors().into_iter().enumerate() {
            assert_eq!(index, color as usize);
        }
    }

    #[test]
    fn shape_as_usize() {
        for (index, shape) in Shape::shapes().into_iter().enumerate() {
            assert_eq!(index, shape as usize);
        }
    }

    #[test]
    fn shares_one_trait_same_color() {
        let red_round = Tile::new(Color::Red, Shape::Round);
        let red_plus = Tile::new(Color::Red, Shape::Plus);
        assert!(red_round.shares_one_trait(red_plus));
    }

    #[test]
    fn shares_one_trait_same_shape() {
        let red_round = Tile::new(Color::Red, Shape::Round);
        let blue_round = Tile::new(Color::Blue, Shape::Round);
        assert!(red_round.shares_one_trait(blue_round));
    }

    #[test]
    fn shares_one_trait_identical() {
        let red_round = Tile::new(Color::Red, Shape::Round);
        assert!(!red_round.shares_one_trait(red_round));
    }

    #[test]
    fn shares_one_trait_nothing_shared() {
        let red_round = Tile::new(Color::Red, Shape::Round);
        let blue_star = Tile::new(Color::Blue, Shape::Star);
        assert!(!red_round.shares_one_trait(blue_star));
    }

    #[test]
    fn display() {
        assert_eq!(
            "green diamond",
            Tile::new(Color::Green, Shape::Diamond).to_string()
        );
    }

    fn any_tile() -> impl Strategy<Value = Tile> {
        (0..TILES_LEN).prop_map(|index| tiles()[index])
    }

    proptest! {
        #[test]
        fn prop_shares_one_trait_symmetric(a in any_tile(), b in any_tile()) {
            prop_assert_eq!(a.shares_one_trait(b), b.shares_one_trait(a));
        }
    }
}
