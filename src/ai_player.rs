use tracing::debug;

use crate::error::PlayError;
use crate::heuristic::choose_column;
use crate::{Game, Player};

/// Returns the column the computer plays for `player`.
///
/// Only fails if the board is full, which the game loop rules out before
/// asking for a move.
pub fn search_best_move<const W: usize, const H: usize>(
    game: &Game<W, H>,
    player: Player,
) -> Result<usize /* column */, PlayError> {
    let column = choose_column(game.board(), player).ok_or(PlayError::NoEligibleColumn)?;
    debug!(
        round = game.round(),
        player = player.number(),
        column,
        "Computer chose column"
    );
    Ok(column)
}
