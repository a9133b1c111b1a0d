//! Fixed-rule player

use crate::board::{Board, Location, Player};

use super::Strategy;

/// Plays the first blank cell in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct DumbAi {
    me: Player,
}

impl DumbAi {
    pub fn new(me: Player) -> Self {
        Self { me }
    }
}

impl Strategy for DumbAi {
    fn player(&self) -> Player {
        self.me
    }

    fn next_move(&mut self, board: &Board) -> Option<Location> {
        board.blanks().next()
    }
}
