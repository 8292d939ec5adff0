//! Error types of the board and of a running game.

use std::io;

/// Rejected move on the [`crate::Gameboard`] or [`crate::Game`].
///
/// A full column is an expected outcome and never leaves the board in a
/// modified state.
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Eq, thiserror::Error)]
pub enum GameboardError {
    /// Column is full.
    #[error("column is full")]
    ColumnFull,
    #[error("column index is out of range")]
    InvalidColumn,
    /// A move was submitted after the game ended.
    #[error("the game is already over")]
    GameOver,
}

/// Errors that stop a running game.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("no column is available for the computer player")]
    NoEligibleColumn,

    #[error("input ended before a valid selection was made")]
    InputClosed,

    #[error("player {player} chose rejected column {column}: {source}")]
    RejectedMove {
        player: u8,
        column: usize,
        source: GameboardError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
