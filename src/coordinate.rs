use crate::BOARD_RADIUS;
use std::cmp;

/// A tuple with two integer components for the row and the column of a cell on the board,
/// where `(0, 0)` is the centre of the board.
///
/// # See Also
///
/// * [BOARD_RADIUS]
/// * [Grid](crate::Grid)
pub type Coordinate = (isize, isize);

/// The centre of the board, where the first [tile](crate::Tile) of a game is placed.
pub const CENTER: Coordinate = (0, 0);

/// Whether both components of `coordinate` lie inside `-BOARD_RADIUS..=BOARD_RADIUS`.
#[inline]
pub fn is_on_board((row, col): Coordinate) -> bool {
    (-BOARD_RADIUS..=BOARD_RADIUS).contains(&row)
        && (-BOARD_RADIUS..=BOARD_RADIUS).contains(&col)
}

/// Finds the minimum and maximum components from [coordinates](Coordinate) for each component.
/// If `coordinates` is empty, [None] is returned.
///
/// # Arguments
///
/// * `coordinates`: An [iterator](Iterator) of [coordinates](Coordinate).
///
/// # See Also
///
/// * [Grid::bounds](crate::Grid::bounds)
///
/// # Returns
///
/// A tuple with `4` different bounds in the following order:
///
/// * The minimum row
/// * The minimum column
/// * The maximum row
/// * The maximum column
pub fn find_component_minimums_and_maximums(
    mut coordinates: impl Iterator<Item = Coordinate>,
) -> Option<(isize, isize, isize, isize)> {
    let (row, col) = coordinates.next()?;

    let (mut min_row, mut min_col, mut max_row, mut max_col) = (row, col, row, col);

    for (row, col) in coordinates {
        (min_row, min_col) = (cmp::min(min_row, row), cmp::min(min_col, col));
        (max_row, max_col) = (cmp::max(max_row, row), cmp::max(max_col, col));
    }

    Some((min_row, min_col, max_row, max_col))
}

/// Finds the adjacent [coordinates](Coordinate) from the argument [coordinate](Coordinate)
/// where adjacent is 4 directional and not diagonal.
///
/// # Returns
///
/// An array of 4 [coordinates](Coordinate) in natural lexicographic order.
pub fn adjacent_coordinates((row, col): Coordinate) -> [Coordinate; 4] {
    [(row - 1, col), (row, col - 1), (row, col + 1), (row + 1, col)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random_illegal_coordinates, random_legal_coordinates};
    use rand::Rng;
    use std::iter;

    #[test]
    fn find_component_minimums_and_maximums_empty() {
        assert!(find_component_minimums_and_maximums(iter::empty()).is_none());
    }

    #[test]
    fn find_component_minimums_and_maximums_one_coordinate() {
        let (row, col) = rand::thread_rng().gen();

        test_find_component_minimums_and_maximums([(row, col)], (row, col, row, col));
    }

    #[test]
    fn find_component_minimums_and_maximums_mix_components() {
        let mut rng = rand::thread_rng();
        let (row1, col1) = (rng.gen_range(0..100), rng.gen_range(200..300));
        let (row2, col2) = (rng.gen_range(800..900), rng.gen_range(0..100));
        let (row3, col3) = (rng.gen_range(300..400), rng.gen_range(100..200));

        test_find_component_minimums_and_maximums(
            [(row1, col1), (row2, col2), (row3, col3)],
            (row1, col2, row2, col1),
        );
    }

    #[test]
    fn test_adjacent_coordinates() {
        let actual_adjacent_coordinates = adjacent_coordinates((0, 0));
        let expected_adjacent_coordinates = [(-1, 0), (0, -1), (0, 1), (1, 0)];
        assert_eq!(expected_adjacent_coordinates, actual_adjacent_coordinates);
    }

    #[test]
    fn is_on_board_legal() {
        for coordinate in random_legal_coordinates(&mut rand::thread_rng()) {
            assert!(is_on_board(coordinate));
        }
    }

    #[test]
    fn is_on_board_illegal() {
        for coordinate in random_illegal_coordinates(&mut rand::thread_rng()) {
            assert!(!is_on_board(coordinate));
        }
    }

    #[test]
    fn is_on_board_edges() {
        assert!(is_on_board(CENTER));
        assert!(is_on_board((BOARD_RADIUS, -BOARD_RADIUS)));
        assert!(!is_on_board((BOARD_RADIUS + 1, 0)));
        assert!(!is_on_board((0, -BOARD_RADIUS - 1)));
        assert!(!is_on_board((-250, 500)));
    }

    fn test_find_component_minimums_and_maximums(
        coordinates: impl IntoIterator<Item = Coordinate>,
        expected_component_minimums_and_maximums: (isize, isize, isize, isize),
    ) {
        let actual_component_minimums_and_maximums =
            find_component_minimums_and_maximums(coordinates.into_iter())
                .expect("find_component_minimums_and_maximums should return Some");

        assert_eq!(
            expected_component_minimums_and_maximums,
            actual_component_minimums_and_maximums
        );
    }
}
