use crate::{Color, Shape, TILES_LEN};
use konst::primitive::{parse_bool, parse_isize, parse_usize};
use konst::{option, result};

/// The points earned by a line once it holds [every shape](Shape::shapes) or
/// [every color](Color::colors). A complete line of `6` is worth `12` points instead of `6`.
///
/// # See Also
///
/// * [line_points](crate::line_points)
/// * [Grid::first_add](crate::Grid::first_add)
pub const QWIRKLE_POINTS: usize = 12;
/// The length of a complete line. `6` [tiles](crate::Tile), one for each
/// [color](Color) or [shape](Shape).
pub const QWIRKLE_LEN: usize = if Color::COLORS_LEN <= Shape::SHAPES_LEN {
    Color::COLORS_LEN
} else {
    Shape::SHAPES_LEN
};
/// The one-time bonus given to the player who empties their hand once the bag is empty.
/// `6` additional points.
///
/// # See Also
///
/// * [Game::is_over](crate::Game::is_over)
pub const LAST_TILE_BONUS: usize = 6;
/// The fewest players a [game](crate::Game) can be created with.
pub const MIN_PLAYERS: usize = 2;
/// The most players a [game](crate::Game) can be created with.
pub const MAX_PLAYERS: usize = 4;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. If the environment
/// variable named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to
/// [MAX_PLAYERS].
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    MAX_PLAYERS
);
/// The number of [tiles](crate::Tile) a hand is refilled to. If the environment variable named
/// `HAND_LEN` is present at compile time and is able to be parsed into a `usize`, set to the
/// value of the environment variable. Otherwise, it is set to `6`.
///
/// # See Also
///
/// * [Player::refill](crate::Player::refill)
pub const HAND_LEN: usize = option::unwrap_or!(
    option::and_then!(option_env!("HAND_LEN"), |str| result::ok!(parse_usize(str))),
    6
);
const _: () = assert!(HAND_LEN > 0);
/// The number of copies of each [tile](crate::Tile) variant in a fresh bag. If the environment
/// variable named `TILE_COPIES` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to `3`.
///
/// # See Also
///
/// * [Bag::new](crate::Bag::new)
pub const TILE_COPIES: usize = option::unwrap_or!(
    option::and_then!(option_env!("TILE_COPIES"), |str| result::ok!(parse_usize(
        str
    ))),
    3
);
/// The number of [tiles](crate::Tile) in a fresh bag. `108` by default.
pub const BAG_LEN: usize = TILES_LEN * TILE_COPIES;
const _: () = assert!(BAG_LEN >= MAX_PLAYERS * HAND_LEN);
/// The inclusive maximum absolute value of a component in a [coordinate](crate::Coordinate).
/// The board is the square `-BOARD_RADIUS..=BOARD_RADIUS` on both axes with its centre at
/// the origin. If the environment variable named `BOARD_RADIUS` is present at compile time and
/// is able to be parsed into an `isize`, set to the saturating absolute value of the environment
/// variable. Otherwise, it is set to `45` for a `91` by `91` board.
///
/// # Panics
///
/// * When the given value would not fit a complete line from the centre
/// * When the given value is [isize::MAX] and stepping off the board would overflow
///
/// # See Also
///
/// * [is_on_board](crate::is_on_board)
/// * [Grid](crate::Grid)
pub const BOARD_RADIUS: isize = option::unwrap_or!(
    option::and_then!(option_env!("BOARD_RADIUS"), |str| result::ok!(
        parse_isize(str)
    )),
    45
)
.saturating_abs();
const _: () = assert!(BOARD_RADIUS >= QWIRKLE_LEN as isize);
// cannot use assert_ne! in a const context
const _: () = assert!(BOARD_RADIUS != isize::MAX);
/// The default for [Rules::green_wildcard](crate::Rules::green_wildcard). If the environment
/// variable named `GREEN_WILDCARD` is present at compile time and is able to be parsed into
/// a `bool`, set to the value of the environment variable. Otherwise, it is set to `false`.
pub const GREEN_WILDCARD: bool = option::unwrap_or!(
    option::and_then!(option_env!("GREEN_WILDCARD"), |str| result::ok!(
        parse_bool(str)
    )),
    false
);
/// The version written into every [snapshot](crate::GameSnapshot). Snapshots with any other
/// version are rejected when decoded.
pub const SNAPSHOT_VERSION: u32 = 1;
