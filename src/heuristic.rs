//! Static column ranking of the computer player.
//!
//! There is no lookahead: every free column is rated once by what a token
//! dropped there would complete, for the computer itself and for its
//! opponent.

use tracing::trace;

use crate::{Gameboard, Player};

/// How urgent it is to play a column. Ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    #[default]
    None,
    /// The opponent would get three in a row here.
    BlockLosingChance,
    /// We get three in a row here.
    WinningChance,
    /// The opponent would win here.
    BlockLosing,
    /// We win here.
    Winning,
}

/// Column indices starting at the center and alternating outwards.
///
/// Odd widths start at the center and go left first, even widths start at
/// the center-left column and go right first. Every column of `width` is
/// emitted exactly once.
pub fn center_out_columns(width: usize) -> impl Iterator<Item = usize> {
    let center = width.saturating_sub(1) / 2;
    let first_side: isize = if width % 2 == 0 { 1 } else { -1 };

    (0..2 * width as isize)
        .map(move |i| {
            let distance = (i + 1) / 2;
            if i % 2 == 1 {
                center as isize + first_side * distance
            } else {
                center as isize - first_side * distance
            }
        })
        .filter(move |&col| col >= 0 && (col as usize) < width)
        .map(|col| col as usize)
        .take(width)
}

/// Rates a free column for `player`, given the row a token would land in.
///
/// Lower tiers are only considered while nothing better than them has been
/// seen in the scan so far.
fn rate_column<const W: usize, const H: usize>(
    board: &Gameboard<W, H>,
    row: usize,
    col: usize,
    player: Player,
    highest: Priority,
) -> Priority {
    let opponent = player.opponent();
    if board.check_victory(row, col, player) {
        Priority::Winning
    } else if board.check_victory(row, col, opponent) {
        Priority::BlockLosing
    } else if highest < Priority::WinningChance && board.check_almost_victory(row, col, player) {
        Priority::WinningChance
    } else if highest < Priority::BlockLosingChance
        && board.check_almost_victory(row, col, opponent)
    {
        Priority::BlockLosingChance
    } else {
        Priority::None
    }
}

/// Picks the column `player` should drop into.
///
/// A winning column is returned as soon as it is found. Otherwise the first
/// column in center-out order that carries the highest priority wins.
/// Returns `None` if every column is full.
#[must_use]
pub fn choose_column<const W: usize, const H: usize>(
    board: &Gameboard<W, H>,
    player: Player,
) -> Option<usize> {
    let order = center_out_columns(W).collect::<Vec<_>>();
    // `None` marks a full column
    let mut priorities = [None; W];
    let mut highest = Priority::None;

    for &col in &order {
        let Some(row) = board.free_row(col) else {
            continue;
        };

        let priority = rate_column(board, row, col, player, highest);
        trace!(column = col, ?priority, "Rated column");
        if priority == Priority::Winning {
            return Some(col);
        }

        highest = highest.max(priority);
        priorities[col] = Some(priority);
    }

    order
        .into_iter()
        .find(|&col| priorities[col] == Some(highest))
}
