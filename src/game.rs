//! Game logic and game board.

use core::fmt;

use tracing::debug;

use crate::error::GameboardError;

/// Character printed for a cell without a token.
pub const EMPTY_TOKEN: char = '.';

/// State of a game after a round.
#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub enum GameStatus {
    /// Game continues.
    InProgress,
    /// Player won with the last insertion.
    Won(Player),
    /// The game field is full without a winner.
    Tie,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Game with all its state.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Game<const W: usize = 7, const H: usize = 6> {
    board: Gameboard<W, H>,
    round: usize,
    current_player: Player,
    status: GameStatus,
}

impl<const W: usize, const H: usize> Game<W, H> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Gameboard::new(),
            round: 0,
            current_player: Player::Player1,
            status: GameStatus::InProgress,
        }
    }

    /// Drops a token of the active player into `column_index` and evaluates
    /// the resulting position.
    ///
    /// The turn passes to the opponent only if the game continues. A rejected
    /// drop leaves the game untouched.
    pub fn play_round(&mut self, column_index: usize) -> Result<GameStatus, GameboardError> {
        if self.status.is_over() {
            return Err(GameboardError::GameOver);
        }

        let player = self.current_player;
        let row_index = self.board.drop_chip(column_index, player)?;
        self.round += 1;

        self.status = if self.board.check_victory(row_index, column_index, player) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Tie
        } else {
            self.current_player = player.opponent();
            GameStatus::InProgress
        };

        debug!(
            round = self.round,
            player = player.number(),
            row = row_index,
            column = column_index,
            status = ?self.status,
            "Applied move"
        );
        Ok(self.status)
    }

    #[must_use]
    pub const fn board(&self) -> &Gameboard<W, H> {
        &self.board
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// The player whose turn it is, or the winner once the game is won.
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }
}

impl<const W: usize, const H: usize> Default for Game<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Gameboard.
#[derive(Debug, PartialEq, Clone, Eq)]
pub struct Gameboard<const W: usize = 7, const H: usize = 6>(
    /*
     * Board: rows --> col --> field
     * Technical indices correspond to the logical indices:
     * (row=0,col=0) <==> bottom left of game board
     */
    pub(crate) [[Option<Player>; W]; H],
);

impl<const W: usize, const H: usize> Default for Gameboard<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Gameboard<W, H> {
    #[must_use]
    pub const fn new() -> Self {
        assert!(W >= 1);
        assert!(H >= 1);

        let board = [[None; W]; H];
        Self(board)
    }

    #[must_use]
    pub const fn board(&self) -> &[[Option<Player>; W]; H] {
        &self.0
    }

    /// Whether `(row, col)` addresses a cell of the board.
    #[must_use]
    pub const fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < H && (col as usize) < W
    }

    /// Returns the cell at `(row, col)`, or `None` when it lies outside the
    /// board.
    #[must_use]
    pub const fn get(&self, row: isize, col: isize) -> Option<Option<Player>> {
        if self.in_bounds(row, col) {
            Some(self.0[row as usize][col as usize])
        } else {
            None
        }
    }

    /// Returns the index of the row a token dropped into `column_index` lands
    /// in.
    ///
    /// Returns `None` if there are no more free slots or the column does not
    /// exist.
    #[must_use]
    pub fn free_row(&self, column_index: usize) -> Option<usize> {
        if column_index >= W {
            return None;
        }
        (0..H).find(|&row_index| self.0[row_index][column_index].is_none())
    }

    /// A column outside the board counts as full, nothing can be dropped there.
    #[must_use]
    pub const fn is_column_full(&self, column_index: usize) -> bool {
        if column_index >= W {
            return true;
        }
        self.0[H - 1][column_index].is_some()
    }

    /// Returns whether there are no legal moves left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available_columns_iter().next().is_none()
    }

    /// Emits the column indices where moves are legal.
    pub fn available_columns_iter(&self) -> impl Iterator<Item = usize> {
        (0..W).filter(|&col| !self.is_column_full(col))
    }

    /// Number of cells holding a token.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.0.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Drops a token of `player` into the column and returns the row it
    /// landed in.
    pub fn drop_chip(&mut self, column_index: usize, player: Player) -> Result<usize, GameboardError> {
        if column_index >= W {
            return Err(GameboardError::InvalidColumn);
        }

        let row_index = self
            .free_row(column_index)
            .ok_or(GameboardError::ColumnFull)?;
        self.0[row_index][column_index] = Some(player);
        Ok(row_index)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }
}

impl<const W: usize, const H: usize> fmt::Display for Gameboard<W, H> {
    /// Top row first, followed by a footer of 1-based column numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.iter().rev() {
            f.write_str("|")?;
            for cell in row {
                let symbol = cell.map_or(EMPTY_TOKEN, Player::token);
                write!(f, "{symbol}|")?;
            }
            writeln!(f)?;
        }

        for col_id in (0..W).map(|i| i + 1) {
            write!(f, " {}", col_id % 10)?;
        }
        writeln!(f)
    }
}

#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    /// Character representing the player's tokens on the board.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Player1 => 'X',
            Self::Player2 => 'O',
        }
    }

    /// 1-based player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Player1 => 1,
            Self::Player2 => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} ({})", self.number(), self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn fill_column<const W: usize, const H: usize>(board: &mut Gameboard<W, H>, col: usize) {
        for _ in 0..board.height() {
            let _ = board.drop_chip(col, Player::Player1);
        }
    }

    #[test]
    fn test_free_row() {
        let mut board = Gameboard::<7, 6>::new();
        assert_eq!(board.free_row(0), Some(0));

        for i in 0..board.height() - 1 {
            board.0[i][0] = Some(Player::Player1);
            assert_eq!(board.free_row(0), Some(i + 1));
        }

        board.0[board.height() - 1][0] = Some(Player::Player1);
        assert_eq!(board.free_row(0), None);
        assert!(board.is_column_full(0));
    }

    #[test]
    fn test_columns_outside_the_board() {
        let board = Gameboard::<7, 6>::new();
        assert_eq!(board.free_row(7), None);
        assert_eq!(board.free_row(usize::MAX), None);
        assert!(board.is_column_full(7));
        assert!(!board.is_full());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Gameboard::<7, 6>::new();
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Some(None));
            }
        }
        assert_eq!(board.occupied_cells(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_drops_into_distinct_columns() {
        let mut board = Gameboard::<7, 6>::new();
        for (n, col) in [3, 0, 6, 2].into_iter().enumerate() {
            assert_eq!(board.drop_chip(col, Player::Player2), Ok(0));
            assert_eq!(board.occupied_cells(), n + 1);
        }
    }

    #[test]
    fn test_drop_into_full_column_does_not_mutate() {
        let mut board = Gameboard::<7, 6>::new();
        for expected_row in 0..6 {
            assert_eq!(board.drop_chip(2, Player::Player1), Ok(expected_row));
        }

        let before = board.clone();
        assert_eq!(
            board.drop_chip(2, Player::Player2),
            Err(GameboardError::ColumnFull)
        );
        assert_eq!(board, before);
        assert_eq!(
            board.drop_chip(7, Player::Player2),
            Err(GameboardError::InvalidColumn)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_in_bounds() {
        let board = Gameboard::<7, 6>::new();
        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(5, 6));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, -1));
        assert!(!board.in_bounds(6, 0));
        assert!(!board.in_bounds(0, 7));
        assert_eq!(board.get(6, 6), None);
    }

    #[test]
    fn test_legal_moves_iter() {
        let mut board = Gameboard::<7, 6>::new();

        assert_eq!(
            board
                .available_columns_iter()
                .collect::<Vec<_>>()
                .as_slice(),
            &[0, 1, 2, 3, 4, 5, 6]
        );

        fill_column(&mut board, 1);
        fill_column(&mut board, 3);
        fill_column(&mut board, 5);
        fill_column(&mut board, 6);
        assert_eq!(
            board
                .available_columns_iter()
                .collect::<Vec<_>>()
                .as_slice(),
            &[0, 2, 4]
        );

        fill_column(&mut board, 0);
        fill_column(&mut board, 2);
        fill_column(&mut board, 4);
        assert_eq!(board.available_columns_iter().count(), 0);
        assert!(board.is_full());
    }

    #[test]
    fn test_display() {
        let mut board = Gameboard::<7, 6>::new();
        board.drop_chip(3, Player::Player1).unwrap();
        board.drop_chip(3, Player::Player2).unwrap();
        board.drop_chip(0, Player::Player2).unwrap();

        let expected = "\
|.|.|.|.|.|.|.|
|.|.|.|.|.|.|.|
|.|.|.|.|.|.|.|
|.|.|.|.|.|.|.|
|.|.|.|O|.|.|.|
|O|.|.|X|.|.|.|
 1 2 3 4 5 6 7
";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_display_footer_wraps_column_numbers() {
        let board = Gameboard::<12, 1>::new();
        assert_eq!(
            board.to_string(),
            "|.|.|.|.|.|.|.|.|.|.|.|.|\n 1 2 3 4 5 6 7 8 9 0 1 2\n"
        );
    }

    #[test]
    fn test_vertical_win_ends_game() {
        let mut game = Game::<7, 6>::new();
        // Player1 stacks column 3, Player2 answers in column 0.
        for _ in 0..3 {
            assert_eq!(game.play_round(3), Ok(GameStatus::InProgress));
            assert_eq!(game.play_round(0), Ok(GameStatus::InProgress));
        }
        assert_eq!(game.play_round(3), Ok(GameStatus::Won(Player::Player1)));
        assert_eq!(game.round(), 7);
        assert_eq!(game.current_player(), Player::Player1);
        assert_eq!(game.play_round(1), Err(GameboardError::GameOver));
        assert_eq!(game.board().occupied_cells(), 7);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::<4, 4>::new();
        assert_eq!(game.play_round(4), Err(GameboardError::InvalidColumn));
        assert_eq!(game.current_player(), Player::Player1);
        assert_eq!(game.round(), 0);

        // Alternating tokens in one column never form a run.
        for _ in 0..4 {
            game.play_round(0).unwrap();
        }
        assert_eq!(game.current_player(), Player::Player1);
        assert_eq!(game.play_round(0), Err(GameboardError::ColumnFull));
        assert_eq!(game.current_player(), Player::Player1);
        assert_eq!(game.round(), 4);
    }

    #[test]
    fn test_full_board_is_a_tie() {
        let mut game = Game::<4, 4>::new();
        // Final position, bottom row first: XXOO / OOXX / XXOO / OOXX
        let moves = [0, 2, 1, 3, 2, 0, 3, 1, 0, 2, 1, 3, 2, 0, 3, 1];
        let (last, rest) = moves.split_last().unwrap();
        for &col in rest {
            assert_eq!(game.play_round(col), Ok(GameStatus::InProgress));
        }
        assert_eq!(game.play_round(*last), Ok(GameStatus::Tie));
        assert!(game.board().is_full());
        assert_eq!(game.play_round(0), Err(GameboardError::GameOver));
    }

    quickcheck! {
        fn free_row_increases_until_column_is_full(col: u8, drops: u8) -> bool {
            let col = usize::from(col % 7);
            let mut board = Gameboard::<7, 6>::new();
            let mut expected_row = 0;
            for _ in 0..drops % 12 {
                let result = board.drop_chip(col, Player::Player1);
                if expected_row < 6 {
                    if result != Ok(expected_row) {
                        return false;
                    }
                    expected_row += 1;
                } else if result != Err(GameboardError::ColumnFull) {
                    return false;
                }
            }
            board.occupied_cells() == expected_row
        }
    }

    quickcheck! {
        fn drops_keep_columns_contiguous(cols: Vec<u8>) -> bool {
            let mut board = Gameboard::<7, 6>::new();
            let mut player = Player::Player1;
            for col in cols {
                let _ = board.drop_chip(usize::from(col % 7), player);
                player = player.opponent();
            }
            (0..7).all(|col| {
                let height = (0..6).take_while(|&row| board.0[row][col].is_some()).count();
                (height..6).all(|row| board.0[row][col].is_none())
            })
        }
    }
}
