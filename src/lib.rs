//! Connect Four for the console.
//!
//! Two players, each a human at the terminal or a heuristic computer player,
//! drop tokens into a grid until one of them lines up [`SERIES_LEN`] tokens
//! or the board is full.

pub mod ai_player;
pub mod console;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod sequence;
pub mod session;

pub use ai_player::search_best_move;
pub use error::{GameboardError, PlayError};
pub use game::{Game, GameStatus, Gameboard, Player};
pub use sequence::{ALMOST_SERIES_LEN, SERIES_LEN};
pub use session::{PlayerKind, Session};
