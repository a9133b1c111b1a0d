//! Searching player

use tracing::debug;

use crate::board::{Board, Location, Player};
use crate::error::GameError;
use crate::eval::LineHeuristic;
use crate::search::{Evaluator, Minimax};

use super::Strategy;

/// Minimax over adjacent cells scored by open lines
pub type SmartAi = Minimax<LineHeuristic>;

/// Create the searching player for `me` looking `depth` plies ahead.
pub fn smart_ai(me: Player, depth: u32) -> Result<SmartAi, GameError> {
    Minimax::new(me, depth, LineHeuristic)
}

impl<E: Evaluator> Strategy for Minimax<E> {
    fn player(&self) -> Player {
        self.me()
    }

    fn next_move(&mut self, board: &Board) -> Option<Location> {
        let result = self.search(board);
        debug!(
            player = %self.me(),
            best = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            "search finished"
        );
        result.best_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_in_center() {
        let mut ai = smart_ai(Player::X, 2).unwrap();
        assert_eq!(ai.next_move(&Board::EMPTY), Some(Location::center()));
    }

    #[test]
    fn test_completes_five() {
        let mut b = Board::EMPTY;
        for c in 2..6 {
            b = b.update(Player::O, Location::new(7, c).unwrap()).unwrap();
        }
        b = b.update(Player::X, Location::new(7, 1).unwrap()).unwrap();
        b = b.update(Player::X, Location::new(0, 0).unwrap()).unwrap();
        let mut ai = smart_ai(Player::O, 1).unwrap();
        assert_eq!(ai.next_move(&b), Location::new(7, 6).ok());
    }
}
