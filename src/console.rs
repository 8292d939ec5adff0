//! Line based prompts and board output.
//!
//! Every prompt reads whole lines, so malformed input is discarded together
//! with its line and the prompt repeats.

use std::io::{BufRead, Write};

use crate::error::PlayError;
use crate::session::PlayerKind;
use crate::{Gameboard, Player};

fn read_line<R: BufRead>(input: &mut R) -> Result<String, PlayError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PlayError::InputClosed);
    }
    Ok(line)
}

/// Asks whether `player` is a human or the computer.
pub fn read_player_kind<R: BufRead, O: Write>(
    input: &mut R,
    output: &mut O,
    player: Player,
) -> Result<PlayerKind, PlayError> {
    loop {
        write!(
            output,
            "Choose type for player {}: h - human, c - computer: ",
            player.number()
        )?;
        output.flush()?;

        let line = read_line(input)?;
        match line.trim().to_ascii_lowercase().as_str() {
            "h" | "human" => return Ok(PlayerKind::Human),
            "c" | "computer" => return Ok(PlayerKind::Computer),
            _ => writeln!(output, "Invalid selection. Enter h or c.")?,
        }
    }
}

/// Asks for a 1-based column until one with a free slot is entered and
/// returns its index.
pub fn read_column<R: BufRead, O: Write, const W: usize, const H: usize>(
    input: &mut R,
    output: &mut O,
    board: &Gameboard<W, H>,
) -> Result<usize, PlayError> {
    loop {
        write!(output, "Enter column (1-{}): ", board.width())?;
        output.flush()?;

        let line = read_line(input)?;
        let Ok(selected) = line.trim().parse::<i64>() else {
            writeln!(output, "Invalid input. Enter a number.")?;
            continue;
        };

        let column = match usize::try_from(selected) {
            Ok(column) if (1..=board.width()).contains(&column) => column - 1,
            _ => {
                writeln!(
                    output,
                    "Invalid column. Choose between 1 and {}.",
                    board.width()
                )?;
                continue;
            }
        };

        if board.is_column_full(column) {
            writeln!(output, "Column {selected} is full. Choose another column.")?;
            continue;
        }

        return Ok(column);
    }
}

/// Prints the board framed by blank lines.
pub fn print_board<O: Write, const W: usize, const H: usize>(
    output: &mut O,
    board: &Gameboard<W, H>,
) -> Result<(), PlayError> {
    write!(output, "\n{board}\n")?;
    output.flush()?;
    Ok(())
}
