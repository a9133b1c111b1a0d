//! Immutable board snapshots

use super::bitboard::{Bitboard, BitboardIter};
use super::{Line, Location, Player};
use crate::error::{GameError, IllegalMoveReason};
use crate::rules::victory_through;

/// The possible states of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Some line is fully owned by one player
    HasWinner,
    /// Every cell is filled and nobody won
    Draw,
    NotOver,
}

/// A won game: who won and which five cells did it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Victory {
    pub winner: Player,
    pub line: Line,
}

/// The state of a board at a given point in time.
///
/// Boards are immutable: [`Board::update`] returns a modified copy and never
/// touches the original. Start from [`Board::EMPTY`] and update from there.
/// A board is 34 bytes and `Copy`, so snapshots are shared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// X marks
    x: Bitboard,
    /// O marks
    o: Bitboard,
    state: State,
    /// Set exactly when state is HasWinner
    winner: Option<Victory>,
}

impl Board {
    /// The empty board
    pub const EMPTY: Board = Board {
        x: Bitboard::new(),
        o: Bitboard::new(),
        state: State::NotOver,
        winner: None,
    };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Return a new board equal to this one with `loc` marked for `player`.
    ///
    /// Fails with `IllegalMove` if `loc` is taken or the game is already decided.
    pub fn update(&self, player: Player, loc: Location) -> Result<Board, GameError> {
        if !self.is_blank(loc) {
            return Err(GameError::IllegalMove {
                loc,
                reason: IllegalMoveReason::Occupied,
            });
        }
        if self.state != State::NotOver {
            return Err(GameError::IllegalMove {
                loc,
                reason: IllegalMoveReason::GameOver,
            });
        }

        let mut next = *self;
        match player {
            Player::X => next.x.set(loc),
            Player::O => next.o.set(loc),
        }

        // Any line completed by this move passes through loc
        next.winner = victory_through(&next, loc);
        next.state = if next.winner.is_some() {
            State::HasWinner
        } else if next.occupied().complement().is_empty() {
            State::Draw
        } else {
            State::NotOver
        };

        Ok(next)
    }

    /// Get the mark at a location, or None if blank
    #[inline]
    pub fn get(&self, loc: Location) -> Option<Player> {
        if self.x.get(loc) {
            Some(Player::X)
        } else if self.o.get(loc) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Mark at raw coordinates; None when blank or off the board.
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Player> {
        Location::new(row, col).ok().and_then(|loc| self.get(loc))
    }

    #[inline]
    pub fn is_blank(&self, loc: Location) -> bool {
        !self.occupied().get(loc)
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// The victory, if the game has been won.
    ///
    /// Fails with `NoWinner` unless the state is `HasWinner`.
    pub fn winner(&self) -> Result<Victory, GameError> {
        self.winner.ok_or(GameError::NoWinner)
    }

    /// Optional form of [`Board::winner`]
    #[inline]
    pub fn victory(&self) -> Option<Victory> {
        self.winner
    }

    /// Bitboard of one player's marks
    #[inline]
    pub fn marks(&self, player: Player) -> Bitboard {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.x.union(self.o)
    }

    /// Blank cells in row-major order
    #[inline]
    pub fn blanks(&self) -> BitboardIter {
        self.occupied().complement().iter_ones()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
