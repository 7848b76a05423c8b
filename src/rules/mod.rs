//! Game rules for Go-Moku
//!
//! This module implements the rule set:
//! - Move validation (bounds, occupancy, turn order, finished games)
//! - Win condition (five or more in a row on any axis)
//! - Draw condition (board full without a win)

pub mod validate;
pub mod win;

use crate::board::Mark;

// Re-exports for convenient access
pub use validate::validate_move;
pub use win::{count_direction, find_line_at_pos, has_five_at_pos, run_length, DIRECTIONS, WIN_LENGTH};

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Player,
    Computer,
}

impl Turn {
    /// Mark placed by this side
    #[inline]
    pub fn mark(self) -> Mark {
        match self {
            Turn::Player => Mark::Player,
            Turn::Computer => Mark::Computer,
        }
    }

    #[inline]
    pub fn other(self) -> Turn {
        match self {
            Turn::Player => Turn::Computer,
            Turn::Computer => Turn::Player,
        }
    }
}

/// Game progress. Once it leaves `InProgress` it never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    PlayerWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Status after `mark` completes a winning run
    pub fn won_by(mark: Mark) -> GameStatus {
        match mark {
            Mark::Player => GameStatus::PlayerWon,
            Mark::Computer => GameStatus::ComputerWon,
            Mark::Empty => GameStatus::InProgress,
        }
    }

    /// Mark of the winning side, if any
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::PlayerWon => Some(Mark::Player),
            GameStatus::ComputerWon => Some(Mark::Computer),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Human-readable result; empty while the game is running
    pub fn message(self) -> &'static str {
        match self {
            GameStatus::InProgress => "",
            GameStatus::PlayerWon => "You win!",
            GameStatus::ComputerWon => "Computer wins!",
            GameStatus::Draw => "It's a draw!",
        }
    }
}
