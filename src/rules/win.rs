//! Win condition checking
//!
//! A game is won by the side that gets five or more marks in a row along
//! one of the four axes. Overlines count.
//!
//! Only the lines through the newly placed mark can have changed, so every
//! check here is anchored at a single position instead of scanning the
//! whole board.

use crate::board::{Board, Mark, Pos};

/// Marks in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count consecutive `mark` cells starting next to `pos` and moving along
/// `dir`. The cell at `pos` itself is not counted.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, dir: (i32, i32), mark: Mark) -> usize {
    let size = board.size();
    let mut count = 0;
    while let Some(next) = pos.offset(dir, count as i32 + 1, size) {
        if board.get(next) != mark {
            break;
        }
        count += 1;
    }
    count
}

/// Length of the run through `pos` along an axis, counting `pos` as one
/// of the marks.
#[inline]
pub fn run_length(board: &Board, pos: Pos, axis: (i32, i32), mark: Mark) -> usize {
    let (dr, dc) = axis;
    1 + count_direction(board, pos, (dr, dc), mark) + count_direction(board, pos, (-dr, -dc), mark)
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks the 4 axes through `pos`. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&axis| run_length(board, pos, axis, mark) >= WIN_LENGTH)
}

/// Find the winning run through `pos`, if one exists.
///
/// Returns every cell of the first axis reaching `WIN_LENGTH`, ordered from
/// the negative end to the positive end.
pub fn find_line_at_pos(board: &Board, pos: Pos, mark: Mark) -> Option<Vec<Pos>> {
    if mark == Mark::Empty || board.get(pos) != mark {
        return None;
    }
    let size = board.size();

    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, (-dr, -dc), mark);
        let forward = count_direction(board, pos, (dr, dc), mark);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        let line = (-(back as i32)..=forward as i32)
            .filter_map(|dist| pos.offset((dr, dc), dist, size))
            .collect();
        return Some(line);
    }
    None
}
