//! Errors reported for rejected moves

use thiserror::Error;

use crate::board::Mark;

/// Why a move was rejected. None of these end the game; the caller may
/// simply try again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The game already has a result
    #[error("game is over")]
    GameOver,

    /// Coordinates outside `[0, size)`
    #[error("({row}, {col}) is off the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: u8 },

    /// Target cell already holds a mark
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    /// Mark does not belong to the side to move
    #[error("expected {expected:?} to move, got {got:?}")]
    WrongTurn { expected: Mark, got: Mark },
}
