//! Console front end
//!
//! Reads moves as two 1-based numbers and prints the board after every
//! move. The two numbers may share a line or come on consecutive lines. Generic over the input and output streams so whole sessions
//! can be replayed in tests.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::board::Mark;
use crate::engine::GameEngine;
use crate::rules::GameStatus;

/// What one line of player input asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// 0-based coordinates
    Move(i32, i32),
    /// A lone 1-based number, completed by the next line
    Single(i32),
    Quit,
    Malformed,
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
        return Command::Quit;
    }

    let mut parts = trimmed.split_whitespace().map(str::parse::<i32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Command::Move(zero_based(row), zero_based(col)),
        (Some(Ok(n)), None, None) => Command::Single(n),
        _ => Command::Malformed,
    }
}

fn zero_based(n: i32) -> i32 {
    n.saturating_sub(1)
}

fn write_board<W: Write>(engine: &GameEngine, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", engine.board())?;
    writeln!(out)
}

/// Play one game over the given streams.
///
/// Returns the final status; `InProgress` means the player quit or input
/// ran out before the game ended.
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    mut input: R,
    mut out: W,
) -> io::Result<GameStatus> {
    let size = engine.size();
    writeln!(out, "Welcome to {size}x{size} Go-Moku!")?;
    writeln!(out, "Enter moves as 'row col' (1-{size})")?;

    let mut line = String::new();
    while !engine.is_game_over() {
        write_board(engine, &mut out)?;

        if !engine.is_player_turn() {
            writeln!(out, "Computer's turn...")?;
            if engine.apply_random_computer_move().is_none() {
                // Only a picker that declines can get here
                writeln!(out, "Computer passes.")?;
                break;
            }
            continue;
        }

        let mut pending = None;
        loop {
            if pending.is_none() {
                write!(out, "Your move (row col): ")?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                info!("input closed before the game ended");
                return Ok(engine.status());
            }

            let (row, col) = match (parse_command(&line), pending.take()) {
                (Command::Move(row, col), _) => (row, col),
                (Command::Single(col), Some(row)) => (zero_based(row), zero_based(col)),
                (Command::Single(row), None) => {
                    pending = Some(row);
                    continue;
                }
                (Command::Quit, _) => {
                    writeln!(out, "Goodbye!")?;
                    info!("player quit");
                    return Ok(engine.status());
                }
                (Command::Malformed, _) => {
                    debug!("unparseable input {:?}", line.trim_end());
                    writeln!(out, "Please enter two numbers between 1 and {size}.")?;
                    continue;
                }
            };

            if engine.apply_move(row, col, Mark::Player) {
                break;
            }
            writeln!(out, "Invalid move. Try again.")?;
        }
    }

    write_board(engine, &mut out)?;
    writeln!(out, "{}", engine.result_message())?;
    out.flush()?;
    Ok(engine.status())
}
