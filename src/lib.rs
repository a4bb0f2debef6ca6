//! A board engine for a tile matching game: the grid and its placement rules, scoring,
//! the bag and hands, and the turn controller that ties them together.
//!
//! ## Summary
//!
//! Players take turns placing [tiles](Tile) from their [hand](Hand) onto an unbounded looking
//! but finite [grid](Grid). Every line of two or more tiles must share either one
//! [color](Color) or one [shape](Shape) without repeating a tile. Points are earned for every
//! line a move touches, and a line of [six](QWIRKLE_LEN) is worth [double](QWIRKLE_POINTS).
//! Once the [bag](Bag) is empty, the game ends when some hand empties or nobody can move.
//! The player with the most points wins, and ties are shared.
//!
//! ## How is the game created?
//!
//! [Game::new] seats [between two and four](MAX_PLAYERS) uniquely named players, fills a
//! [fresh bag](BAG_LEN), and deals each player a [full hand](HAND_LEN). [Game::new_seeded]
//! does the same with a reproducible bag. Every problem with the names is reported at once
//! through a set of [NewError]s.
//!
//! ## How is the game advanced?
//!
//! The current player calls [Game::play] with a [Move], then [Game::pass_turn] hands the turn
//! to the next player in seat order. Before the first move, only [Move::First] is accepted,
//! which lays a line out from the centre of the grid.
//!
//! ### How are tiles placed?
//!
//! A [move](Move) names [tiles](Tile) by their index in the current player's hand. The tiles
//! are resolved and removed from a copy of the hand, placed on the grid all at once, then the
//! points are added and the hand is refilled from the bag. If any step fails, nothing changes.
//!
//! The [grid](Grid) checks each tile in order: the cell must be on the board and empty, must
//! not repeat a tile in its lines, must touch a placed tile, and must be compatible with every
//! tile in its row and column. The whole move is rolled back on the first [RuleViolation].
//!
//! ## How are points calculated?
//!
//! The number of points earned by a move is the sum over every line of two or more tiles that
//! contains a placed tile, where a line scores its length or [QWIRKLE_POINTS] for a line of
//! [QWIRKLE_LEN]. A tile can be counted twice if it is part of both a row and a column. The
//! first player to empty their hand after the bag runs out earns a one time
//! [bonus](LAST_TILE_BONUS).
//!
//! ## How is the game viewed?
//!
//! [Game::view] borrows everything every player may see: the grid, scores, hand lengths,
//! and the number of tiles left in the bag. [Game::get_hand] shares the private hand of one
//! player.
//!
//! ## How is the game saved?
//!
//! [Game::snapshot] copies the whole game, including the state of the bag's random number
//! generator, into a [GameSnapshot] that encodes to bytes. [Game::restore] checks that no
//! tile was lost before resuming.
//!
//! ## How is the game run?
//!
//! [run] drives a game against one [Seat] per player, broadcasting the [view](GameView)
//! before every turn and asking the current player for [commands](Command) until their turn
//! is done.
//!
//! ## How are games tested when properties are private?
//!
//! The `test` build configuration adds methods to get mutable references to private
//! properties, fixtures for common scenarios, and helpers to generate random
//! [coordinates](Coordinate) and [tiles](Tile).

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use consts::*;
pub use coordinate::*;
pub use direction::*;
pub use game::*;
pub use grid::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use rules::*;
pub use runtime::*;
pub use tile::*;

mod bag;
mod consts;
mod coordinate;
mod direction;
mod game;
mod grid;
mod player;
#[cfg(test)]
mod random;
mod rules;
mod runtime;
mod tile;
