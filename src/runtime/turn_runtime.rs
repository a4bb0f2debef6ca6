use crate::runtime::{Command, Seat};
use crate::{Game, GameStatus, PlayError};
use tracing::debug;

/// It repeatedly asks the current player for a [`Command`], and if the command is
/// rejected, it tells the player about the error and asks again. Stops asking once a move
/// is committed or the turn is passed.
///
/// Calls [`Seat::get_command`] for an input. Attempts [`Game::play`] for [`Command::Play`],
/// hands over [`Game::snapshot`] through [`Seat::save`] for [`Command::Save`], and accepts
/// [`Command::Pass`] only once the game has started. Rejected commands are reported through
/// [`Seat::update_errors`].
///
/// Does not advance the turn.
///
/// # Arguments
///
/// * `seats`: A slice of seats in the same order as the players of `game`.
/// * `game`: The current state of the game.
///
/// # Errors
///
/// When the current player fails to send input, receive an error update, or store a snapshot.
///
/// # Panics
///
/// When there are fewer seats than players.
pub fn process_input<S, E>(seats: &[S], game: &mut Game) -> Result<(), E>
where
    S: Seat<E>,
{
    let current_player = game.current_player();
    let seat = &seats[current_player];

    loop {
        let command = seat.get_command()?;
        let error = match &command {
            Command::Play(play) => match game.play(play) {
                Ok(_) => return Ok(()),
                Err(error) => error,
            },
            Command::Pass => match game.status() {
                GameStatus::InProgress => return Ok(()),
                GameStatus::NotStarted => PlayError::FirstMovePending,
                GameStatus::Over => PlayError::GameOver,
            },
            Command::Save => {
                seat.save(game.snapshot())?;
                continue;
            }
        };

        debug!(current_player, %error, "rejected command");
        // cannot use map_err since E needs to be propagated here
        let view = game.view();
        seat.update_errors(
            &view,
            game.get_hand(current_player)
                .unwrap_or_else(|| unreachable!("the current player should be seated.")),
            command,
            error,
        )?;
    }
}
