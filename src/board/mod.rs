//! Board representation for Go-Moku

pub mod board;


// Re-exports
pub use board::Board;

/// Board size used when none is configured (6x6)
pub const DEFAULT_BOARD_SIZE: u8 = 6;
/// Largest board the front ends will configure
pub const MAX_BOARD_SIZE: u8 = 19;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Player,
    Computer,
}

impl Mark {
    /// Character used when printing the board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }

    /// Get the other side's mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
            Mark::Empty => Mark::Empty,
        }
    }
}

/// Position on the board (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check signed coordinates against a board of `size`
    #[inline]
    pub fn is_valid(row: i32, col: i32, size: u8) -> bool {
        let size = size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Build a position from signed coordinates, if they fit on the board
    #[inline]
    pub fn checked(row: i32, col: i32, size: u8) -> Option<Self> {
        Self::is_valid(row, col, size).then(|| Self::new(row as u8, col as u8))
    }

    /// Step `dist` cells along `(dr, dc)`, staying on a board of `size`
    #[inline]
    pub fn offset(self, (dr, dc): (i32, i32), dist: i32, size: u8) -> Option<Self> {
        Self::checked(
            self.row as i32 + dr * dist,
            self.col as i32 + dc * dist,
            size,
        )
    }
}
