//! Error types for the five-in-a-row model and its players

use std::fmt;

use thiserror::Error;

use crate::board::{Location, Player};

/// Why a mark could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The cell already holds a mark
    Occupied,
    /// The board already has a winner or is full
    GameOver,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::Occupied => f.write_str("cell is already taken"),
            IllegalMoveReason::GameOver => f.write_str("the game is already decided"),
        }
    }
}

/// Errors raised by board construction, move submission and configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates outside the 9x9 grid
    #[error("invalid location ({row}, {col})")]
    InvalidLocation { row: i32, col: i32 },

    /// Line direction is not a unit step
    #[error("invalid line direction ({dr}, {dc})")]
    InvalidDirection { dr: i32, dc: i32 },

    /// Mark placed on a taken cell or after the game ended
    #[error("illegal move at {loc}: {reason}")]
    IllegalMove {
        loc: Location,
        reason: IllegalMoveReason,
    },

    /// Move submitted for the player who is not next
    #[error("it is not {player}'s turn ({expected} plays next)")]
    OutOfTurn { player: Player, expected: Player },

    /// Winner requested from a board without one
    #[error("the board has no winner")]
    NoWinner,

    /// Minimax search needs at least one ply
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u32),

    /// Malformed configuration value
    #[error("invalid value {value:?} for {key}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl GameError {
    /// True for both flavours of rejected mark placement.
    #[inline]
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::IllegalMove { .. })
    }
}
