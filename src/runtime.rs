use crate::{GameSnapshot, GameView, Hand, Move, PlayError};
use async_trait::async_trait;

pub use game_runtime::*;
pub use turn_runtime::*;

mod game_runtime;
mod turn_runtime;

/// What the current player asks for on their turn.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    /// Attempt [a move](crate::Game::play).
    Play(Move),
    /// End the turn without placing any [tiles](crate::Tile).
    Pass,
    /// Take a [snapshot](GameSnapshot) of the game and keep the turn.
    Save,
}

/// Defines how the runtime talks to the person or program sitting at one seat of the table.
///
/// `get_command` blocks execution until getting input.
/// `update_errors` and `save` block execution until updating output.
/// `update_view` may execute in parallel with the other seats.
///
/// # Errors
///
/// The implementor of [`Seat`] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
#[async_trait]
pub trait Seat<E> {
    /// On their turn, gets a [`Command`] from the current player.
    fn get_command(&self) -> Result<Command, E>;

    /// When a [`Command`] is rejected, updates the current player with the state of the game,
    /// their hand, their command, and the reason why it could not be executed.
    fn update_errors<'a>(
        &self,
        view: &'a GameView<'a>,
        hand: &'a Hand,
        command: Command,
        error: PlayError,
    ) -> Result<(), E>;

    /// On [`Command::Save`], hands the current player a [snapshot](GameSnapshot) to store.
    fn save(&self, snapshot: GameSnapshot) -> Result<(), E>;

    /// Before every turn and once the game is over, updates each player with the state of
    /// the game and their hand.
    async fn update_view<'a>(&self, view: &'a GameView<'a>, hand: &'a Hand) -> Result<(), E>;
}
