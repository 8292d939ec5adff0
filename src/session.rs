//! Console session driving a [`Game`] from start to end.

use std::io::{BufRead, Write};

use tracing::info;

use crate::ai_player::search_best_move;
use crate::console::{print_board, read_column, read_player_kind};
use crate::error::PlayError;
use crate::{Game, GameStatus, Player};

/// How a player picks their columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PlayerKind {
    /// Columns are read from the console.
    Human,
    /// Columns are picked by the heuristic.
    Computer,
}

/// Console input and output shared by both players.
#[derive(Debug)]
pub struct Session<R, O> {
    input: R,
    output: O,
}

impl<R: BufRead, O: Write> Session<R, O> {
    pub const fn new(input: R, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Resolves the kind of both players. Preset kinds are taken as they are,
    /// the others are asked for on the console.
    pub fn choose_player_kinds(
        &mut self,
        presets: [Option<PlayerKind>; 2],
    ) -> Result<[PlayerKind; 2], PlayError> {
        let [first, second] = presets;
        let first = match first {
            Some(kind) => kind,
            None => read_player_kind(&mut self.input, &mut self.output, Player::Player1)?,
        };
        let second = match second {
            Some(kind) => kind,
            None => read_player_kind(&mut self.input, &mut self.output, Player::Player2)?,
        };
        Ok([first, second])
    }

    /// Plays `game` until it is won or tied and prints the outcome.
    pub fn play<const W: usize, const H: usize>(
        &mut self,
        game: &mut Game<W, H>,
        kinds: [PlayerKind; 2],
    ) -> Result<GameStatus, PlayError> {
        info!(?kinds, width = W, height = H, "Starting game");
        print_board(&mut self.output, game.board())?;

        while !game.status().is_over() {
            let player = game.current_player();
            writeln!(self.output, "{player} turn.")?;

            let column = self.select_column(game, player, kinds[seat(player)])?;
            game.play_round(column)
                .map_err(|source| PlayError::RejectedMove {
                    player: player.number(),
                    column,
                    source,
                })?;
            print_board(&mut self.output, game.board())?;
        }

        let status = game.status();
        match status {
            GameStatus::Won(player) => writeln!(self.output, "{player} wins!")?,
            GameStatus::Tie => writeln!(self.output, "Board full and no winner. It's a tie!")?,
            GameStatus::InProgress => unreachable!("loop only exits once the game is over"),
        }
        self.output.flush()?;

        info!(rounds = game.round(), ?status, "Game over");
        Ok(status)
    }

    fn select_column<const W: usize, const H: usize>(
        &mut self,
        game: &Game<W, H>,
        player: Player,
        kind: PlayerKind,
    ) -> Result<usize, PlayError> {
        match kind {
            PlayerKind::Human => read_column(&mut self.input, &mut self.output, game.board()),
            PlayerKind::Computer => {
                let column = search_best_move(game, player)?;
                // the board printed next starts with the line break
                write!(self.output, "Computer chose column {}", column + 1)?;
                Ok(column)
            }
        }
    }
}

const fn seat(player: Player) -> usize {
    match player {
        Player::Player1 => 0,
        Player::Player2 => 1,
    }
}
