//! Move validation
//!
//! Checks run in a fixed order so the reported error is predictable:
//! finished game, bounds, occupancy, then turn ownership. The finished-game
//! guard must come first: after a win the turn is frozen on the winner,
//! whose mark would otherwise still pass the ownership check.

use crate::board::{Board, Mark, Pos};
use crate::error::MoveError;

use super::{GameStatus, Turn};

/// Validate a move request, returning the on-board position if it may be
/// played.
pub fn validate_move(
    board: &Board,
    row: i32,
    col: i32,
    mark: Mark,
    turn: Turn,
    status: GameStatus,
) -> Result<Pos, MoveError> {
    if status.is_terminal() {
        return Err(MoveError::GameOver);
    }

    let size = board.size();
    let pos = Pos::checked(row, col, size).ok_or(MoveError::OutOfBounds { row, col, size })?;

    if !board.is_empty(pos) {
        return Err(MoveError::Occupied {
            row: pos.row,
            col: pos.col,
        });
    }

    let expected = turn.mark();
    if mark != expected {
        return Err(MoveError::WrongTurn {
            expected,
            got: mark,
        });
    }

    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_legal_move() {
        let board = Board::new(6);
        let result = validate_move(&board, 2, 3, Mark::Player, Turn::Player, GameStatus::InProgress);
        assert_eq!(result, Ok(Pos::new(2, 3)));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let board = Board::new(6);
        for (row, col) in [(-1, 0), (0, -1), (6, 0), (0, 6), (i32::MAX, 0)] {
            assert_eq!(
                validate_move(&board, row, col, Mark::Player, Turn::Player, GameStatus::InProgress),
                Err(MoveError::OutOfBounds { row, col, size: 6 })
            );
        }
    }

    #[test]
    fn test_rejects_occupied() {
        let mut board = Board::new(6);
        board.place(Pos::new(1, 1), Mark::Computer);
        assert_eq!(
            validate_move(&board, 1, 1, Mark::Player, Turn::Player, GameStatus::InProgress),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_rejects_wrong_mark() {
        let board = Board::new(6);
        assert_eq!(
            validate_move(&board, 0, 0, Mark::Computer, Turn::Player, GameStatus::InProgress),
            Err(MoveError::WrongTurn {
                expected: Mark::Player,
                got: Mark::Computer,
            })
        );
        assert_eq!(
            validate_move(&board, 0, 0, Mark::Empty, Turn::Computer, GameStatus::InProgress),
            Err(MoveError::WrongTurn {
                expected: Mark::Computer,
                got: Mark::Empty,
            })
        );
    }

    #[test]
    fn test_check_order() {
        let mut board = Board::new(6);
        board.place(Pos::new(0, 0), Mark::Player);

        // Occupied beats wrong turn
        assert_eq!(
            validate_move(&board, 0, 0, Mark::Computer, Turn::Player, GameStatus::InProgress),
            Err(MoveError::Occupied { row: 0, col: 0 })
        );
        // Bounds beat wrong turn
        assert!(matches!(
            validate_move(&board, 9, 9, Mark::Computer, Turn::Player, GameStatus::InProgress),
            Err(MoveError::OutOfBounds { .. })
        ));
        // Finished game beats everything
        assert_eq!(
            validate_move(&board, -1, 0, Mark::Computer, Turn::Player, GameStatus::Draw),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_winner_cannot_move_again() {
        let board = Board::new(6);
        assert_eq!(
            validate_move(&board, 3, 3, Mark::Player, Turn::Player, GameStatus::PlayerWon),
            Err(MoveError::GameOver)
        );
    }
}
