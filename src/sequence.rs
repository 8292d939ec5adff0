//! Detection of runs of tokens through a single cell.
//!
//! All checks take the cell a token was (or would be) dropped into and treat
//! that cell as holding the player's token, whatever it currently contains.
//! This lets the computer player ask "what if" questions on a shared borrow
//! of the board.

use crate::{Gameboard, Player};

/// Number of coins in a row to win the game.
pub const SERIES_LEN: usize = 4;

/// Number of coins in a row that are one short of a win.
pub const ALMOST_SERIES_LEN: usize = SERIES_LEN - 1;

/// Row and column steps of the axes searched by the sliding window.
const HORIZONTAL: (isize, isize) = (0, 1);
/// `/`: bottom-left to top-right.
const RISING_DIAGONAL: (isize, isize) = (1, 1);
/// `\`: top-left to bottom-right.
const FALLING_DIAGONAL: (isize, isize) = (-1, 1);

impl<const W: usize, const H: usize> Gameboard<W, H> {
    /// Whether a token of `player` at `(row, col)` completes four in a row.
    #[must_use]
    pub fn check_victory(&self, row: usize, col: usize, player: Player) -> bool {
        self.has_run(row, col, player, SERIES_LEN)
    }

    /// Whether a token of `player` at `(row, col)` completes three in a row.
    #[must_use]
    pub fn check_almost_victory(&self, row: usize, col: usize, player: Player) -> bool {
        self.has_run(row, col, player, ALMOST_SERIES_LEN)
    }

    /// Whether a run of `len` tokens of `player` passes through `(row, col)`
    /// along any axis.
    #[must_use]
    pub fn has_run(&self, row: usize, col: usize, player: Player, len: usize) -> bool {
        self.has_vertical_run(row, col, player, len)
            || self.has_line_run(row, col, player, len, HORIZONTAL)
            || self.has_diagonal_run(row, col, player, len)
    }

    /// Only looks downwards: by gravity nothing can sit above a freshly
    /// dropped token.
    fn has_vertical_run(&self, row: usize, col: usize, player: Player, len: usize) -> bool {
        let (row, col) = (row as isize, col as isize);
        (1..len as isize).all(|below| self.get(row - below, col) == Some(Some(player)))
    }

    fn has_diagonal_run(&self, row: usize, col: usize, player: Player, len: usize) -> bool {
        self.has_line_run(row, col, player, len, RISING_DIAGONAL)
            || self.has_line_run(row, col, player, len, FALLING_DIAGONAL)
    }

    /// Slides a window of `len` cells over the axis `step` so that every
    /// position of the window still covers `(row, col)`.
    fn has_line_run(
        &self,
        row: usize,
        col: usize,
        player: Player,
        len: usize,
        (row_step, col_step): (isize, isize),
    ) -> bool {
        if len == 0 {
            return true;
        }

        let reach = len as isize - 1;
        let mut counter = 0;
        for offset in -reach..=reach {
            if offset == 0 {
                counter += 1;
            } else if offset > 0 && counter == 0 {
                // a gap after the target cell, no run can include it anymore
                return false;
            } else if self.get(row as isize + offset * row_step, col as isize + offset * col_step)
                == Some(Some(player))
            {
                counter += 1;
            } else {
                counter = 0;
            }

            if counter == len {
                return true;
            }
        }

        false
    }
}
