//! Interactive game loop.

use crate::input::read_coordinates;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};
use tris_tictactoe::{Game, GameStatus};

/// Plays one game between two people sharing `input` and `output`.
///
/// Each turn prints the board, names the player to move and reads a move.
/// Rejected moves are reported and the same player tries again. The session
/// ends on a win, a draw, a quit keyword or the end of `input`, and the final
/// status is returned.
///
/// # Errors
///
/// Only I/O failures on `input` or `output`.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<GameStatus> {
    let mut game = Game::new();
    info!("Session started");
    writeln!(output, "Welcome to Tris! Coordinates start at 0.")?;

    loop {
        writeln!(output, "\nCurrent board:")?;
        writeln!(output, "{}", game.render())?;
        writeln!(output, "Player {}'s turn.", game.current_player())?;

        let Some(at) = read_coordinates(&mut input, &mut output)? else {
            game.quit();
            writeln!(output, "{}", announcement(*game.status()))?;
            return Ok(*game.status());
        };

        match game.play(at) {
            Ok(GameStatus::InProgress) => {}
            Ok(status) => {
                writeln!(output, "{}", game.render())?;
                writeln!(output, "{}", announcement(status))?;
                return Ok(status);
            }
            Err(e) => {
                debug!(error = %e, %at, "Move rejected");
                writeln!(output, "{}", e)?;
            }
        }
    }
}

fn announcement(status: GameStatus) -> String {
    match status {
        GameStatus::Won(winner) => format!("Congratulations! Player {} wins.", winner),
        GameStatus::Draw => "The game ended in a draw.".to_string(),
        GameStatus::Quit | GameStatus::InProgress => "Game over. Goodbye!".to_string(),
    }
}
