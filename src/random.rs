use crate::{Color, Coordinate, Shape, Tile, BOARD_RADIUS};
use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;
use tracing_subscriber::EnvFilter;

static TEST_LOGGING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_env("TEST_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    // another test harness may already own the global subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

/// Installs a test subscriber once per process. Set `TEST_LOG=debug` to see every
/// placement while a test runs.
pub fn init_test_logging() {
    Lazy::force(&TEST_LOGGING);
}

/// A new [tile](Tile) with a random, different [shape](Shape) but the same [color](Color).
pub fn random_different_shape_same_color<R: Rng + ?Sized>(rng: &mut R, tile: Tile) -> Tile {
    let possible_indexes = Uniform::from(0..Shape::SHAPES_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // skipping the shape at its own index in the array shapes
    let random_different_index =
        random_index + usize::from(random_index >= tile.shape as usize);
    Tile::new(tile.color, Shape::shapes()[random_different_index])
}

/// A new [tile](Tile) with a random, different [color](Color) but the same [shape](Shape).
pub fn random_different_color_same_shape<R: Rng + ?Sized>(rng: &mut R, tile: Tile) -> Tile {
    let possible_indexes = Uniform::from(0..Color::COLORS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // skipping the color at its own index in the array colors
    let random_different_index =
        random_index + usize::from(random_index >= tile.color as usize);
    Tile::new(Color::colors()[random_different_index], tile.shape)
}

/// An [iterator](Iterator) of [coordinates](Coordinate), one per quadrant in random order,
/// where both components lie inside -[BOARD_RADIUS] inclusive to [BOARD_RADIUS] inclusive.
pub fn random_legal_coordinates<R: Rng + ?Sized>(rng: &mut R) -> impl Iterator<Item = Coordinate> {
    let possible_legal_coordinates = Uniform::from(0..=BOARD_RADIUS);
    [
        (
            -possible_legal_coordinates.sample(rng),
            -possible_legal_coordinates.sample(rng),
        ),
        (
            -possible_legal_coordinates.sample(rng),
            possible_legal_coordinates.sample(rng),
        ),
        (
            possible_legal_coordinates.sample(rng),
            -possible_legal_coordinates.sample(rng),
        ),
        (
            possible_legal_coordinates.sample(rng),
            possible_legal_coordinates.sample(rng),
        ),
    ]
    .tap_mut(|coordinates| coordinates.shuffle(rng))
    .into_iter()
}

/// An [iterator](Iterator) of [coordinates](Coordinate) where some component lies outside
/// -[BOARD_RADIUS] inclusive to [BOARD_RADIUS] inclusive.
pub fn random_illegal_coordinates<R: Rng + ?Sized>(
    rng: &mut R,
) -> impl Iterator<Item = Coordinate> {
    let possible_coordinates = Uniform::from(0..4 * BOARD_RADIUS);
    let possible_illegal_coordinates = Uniform::from(BOARD_RADIUS + 1..4 * BOARD_RADIUS);
    [
        (
            -possible_coordinates.sample(rng),
            -possible_illegal_coordinates.sample(rng),
        ),
        (
            -possible_illegal_coordinates.sample(rng),
            possible_coordinates.sample(rng),
        ),
        (
            possible_illegal_coordinates.sample(rng),
            -possible_coordinates.sample(rng),
        ),
        (
            possible_coordinates.sample(rng),
            possible_illegal_coordinates.sample(rng),
        ),
    ]
    .tap_mut(|coordinates| coordinates.shuffle(rng))
    .into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_different_shape_same_color_single_sample() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();

        let other = random_different_shape_same_color(&mut rng, tile);

        assert_eq!(tile.color, other.color);
        assert_ne!(tile.shape, other.shape);
    }

    #[test]
    fn random_different_color_same_shape_single_sample() {
        let mut rng = rand::thread_rng();
        let tile: Tile = rng.gen();

        let other = random_different_color_same_shape(&mut rng, tile);

        assert_ne!(tile.color, other.color);
        assert_eq!(tile.shape, other.shape);
    }

    #[test]
    fn random_legal_coordinates_all_legal() {
        for (row, col) in random_legal_coordinates(&mut rand::thread_rng()) {
            assert!((-BOARD_RADIUS..=BOARD_RADIUS).contains(&row));
            assert!((-BOARD_RADIUS..=BOARD_RADIUS).contains(&col));
        }
    }

    #[test]
    fn random_illegal_coordinates_all_illegal() {
        for (row, col) in random_illegal_coordinates(&mut rand::thread_rng()) {
            assert!(
                !(-BOARD_RADIUS..=BOARD_RADIUS).contains(&row)
                    || !(-BOARD_RADIUS..=BOARD_RADIUS).contains(&col)
            );
        }
    }

    #[test]
    fn init_test_logging_twice() {
        init_test_logging();
        init_test_logging();
    }
}
