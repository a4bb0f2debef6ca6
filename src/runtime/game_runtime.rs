use crate::runtime::{process_input, Seat};
use crate::{Game, Winners};
use futures::future;
use itertools::Itertools;
use tracing::info;

/// Asynchronously sends the current state of the game to every [`Seat`].
///
/// # Arguments
///
/// * `seats`: A slice of seats in the same order as the players of `game`.
/// * `game`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [`Seat::update_view`] into a vector.
///
/// # Returns
///
/// An empty tuple if there are no errors; otherwise, a vector of errors.
pub async fn send_updates<S, E>(seats: &[S], game: &Game) -> Result<(), Vec<E>>
where
    S: Seat<E>,
{
    let view = game.view();
    let update_tasks = seats.iter().enumerate().map(|(player, seat)| {
        seat.update_view(
            &view,
            game.get_hand(player)
                .unwrap_or_else(|| unreachable!("every seat should hold a player.")),
        )
    });

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}

/// Plays `game` to the end. Before every turn, every seat is [updated](send_updates), then the
/// current player is [asked for input](process_input) until their turn is done, and the turn
/// passes to the next player unless the game is [over](Game::is_over). Once it is, every seat
/// gets a final update.
///
/// # Arguments
///
/// * `seats`: A slice of seats in the same order as the players of `game`.
/// * `game`: The game to play, which may be new or [restored](Game::restore).
///
/// # Errors
///
/// The errors of the first step that failed: every error of [`send_updates`], or the one error
/// of [`process_input`].
///
/// # Returns
///
/// The [winners](Game::winners) of the game.
///
/// # Panics
///
/// When there are fewer seats than players.
pub async fn run<S, E>(seats: &[S], game: &mut Game) -> Result<Winners, Vec<E>>
where
    S: Seat<E>,
{
    info!(players = game.players().len(), "running game");

    while !game.is_over() {
        send_updates(seats, game).await?;
        process_input(seats, game).map_err(|error| vec![error])?;
        if !game.is_over() {
            game.pass_turn()
                .unwrap_or_else(|error| unreachable!("the turn should pass after input: {error}"));
        }
    }
    send_updates(seats, game).await?;

    Ok(game.winners())
}
