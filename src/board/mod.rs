//! Board representation for five-in-a-row

pub mod bitboard;
pub mod board;
pub mod line;


use std::fmt;

use once_cell::sync::Lazy;

use crate::error::GameError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, State, Victory};
pub use line::{Line, ALL_LINES, SIZE};

/// Number of rows on every board
pub const NUM_ROWS: usize = 9;
/// Number of columns on every board
pub const NUM_COLS: usize = 9;
pub const TOTAL_CELLS: usize = NUM_ROWS * NUM_COLS; // 81

/// Every valid location in row-major order.
pub static LOCATIONS: Lazy<Vec<Location>> =
    Lazy::new(|| (0..TOTAL_CELLS).map(Location::from_index).collect());

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

/// A cell on the board. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    row: u8,
    col: u8,
}

impl Location {
    /// Create a location, rejecting coordinates outside the grid.
    pub fn new(row: i32, col: i32) -> Result<Self, GameError> {
        if Self::is_valid(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(GameError::InvalidLocation { row, col })
        }
    }

    /// The middle of the board
    #[inline]
    pub const fn center() -> Self {
        Self {
            row: (NUM_ROWS / 2) as u8,
            col: (NUM_COLS / 2) as u8,
        }
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * NUM_COLS + self.col as usize
    }

    /// Inverse of `to_index`; `idx` must be below `TOTAL_CELLS`.
    #[inline]
    pub(crate) fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            row: (idx / NUM_COLS) as u8,
            col: (idx % NUM_COLS) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < NUM_ROWS as i32 && col >= 0 && col < NUM_COLS as i32
    }

    /// The location `steps` cells away in direction (dr, dc), if still on the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Location> {
        let r = self.row as i32 + dr * steps;
        let c = self.col as i32 + dc * steps;
        Self::new(r, c).ok()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
