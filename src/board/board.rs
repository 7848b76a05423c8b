//! Square grid of marks

use std::fmt;

use super::{Mark, Pos};

/// N x N game board
///
/// Cells are stored row-major. Cloning yields an independent snapshot,
/// which is how the engine hands the board to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Mark>,
}

impl Board {
    pub fn new(size: u8) -> Self {
        let n = size as usize;
        Self {
            size,
            cells: vec![Mark::Empty; n * n],
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size as usize + pos.col as usize
    }

    /// Check that a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get mark at position; off-board positions read as empty
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            Mark::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark without any rule checking.
    /// Game moves go through `GameEngine::try_move`.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.cells[idx] = mark;
        }
    }

    /// Number of occupied cells
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    /// Check if board has no marks at all
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&m| m == Mark::Empty)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.positions().filter(|&p| self.is_empty(p)).collect()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Rows of marks, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size.max(1) as usize)
    }
}

/// Coordinate-labeled text rendering with 1-based labels:
///
/// ```text
///   1 2 3
/// 1 X . .
/// 2 . O .
/// 3 . . .
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.to_string().len();

        write!(f, "{:width$}", "")?;
        for col in 1..=self.size {
            write!(f, " {:>width$}", col)?;
        }
        writeln!(f)?;

        for (row, marks) in self.rows().enumerate() {
            write!(f, "{:>width$}", row + 1)?;
            for mark in marks {
                write!(f, " {:>width$}", mark.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
