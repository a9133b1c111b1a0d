//! Human-driven player

use tracing::debug;

use crate::board::{Board, Location, Player};
use crate::error::GameError;

use super::Strategy;

/// Somewhere a human's choice comes from: a terminal, a test script.
pub trait MoveSource: Send {
    /// Block until the user picks a location for `me`; None means they quit.
    fn request_move(&mut self, board: &Board, me: Player) -> Option<Location>;

    /// The last location returned could not be played.
    fn rejected(&mut self, _loc: Location, _err: &GameError) {}
}

/// Plays whatever its source supplies, asking again until the choice is legal.
pub struct Interactive<M> {
    me: Player,
    source: M,
}

impl<M: MoveSource> Interactive<M> {
    pub fn new(me: Player, source: M) -> Self {
        Self { me, source }
    }

    pub fn source(&self) -> &M {
        &self.source
    }
}

impl<M: MoveSource> Strategy for Interactive<M> {
    fn player(&self) -> Player {
        self.me
    }

    fn next_move(&mut self, board: &Board) -> Option<Location> {
        loop {
            let loc = self.source.request_move(board, self.me)?;
            match board.update(self.me, loc) {
                Ok(_) => return Some(loc),
                Err(err) => {
                    debug!(player = %self.me, %loc, %err, "rejected input");
                    self.source.rejected(loc, &err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        answers: VecDeque<Location>,
        rejections: usize,
    }

    impl MoveSource for Scripted {
        fn request_move(&mut self, _board: &Board, _me: Player) -> Option<Location> {
            self.answers.pop_front()
        }

        fn rejected(&mut self, _loc: Location, err: &GameError) {
            assert!(err.is_illegal_move());
            self.rejections += 1;
        }
    }

    fn scripted(cells: &[(i32, i32)]) -> Scripted {
        Scripted {
            answers: cells
                .iter()
                .map(|&(r, c)| Location::new(r, c).unwrap())
                .collect(),
            rejections: 0,
        }
    }

    #[test]
    fn test_reasks_on_taken_cell() {
        let board = Board::EMPTY
            .update(Player::X, Location::center())
            .unwrap();
        let mut human = Interactive::new(Player::O, scripted(&[(4, 4), (4, 5)]));
        assert_eq!(human.next_move(&board), Location::new(4, 5).ok());
        assert_eq!(human.source().rejections, 1);
    }

    #[test]
    fn test_quit_declines() {
        let mut human = Interactive::new(Player::X, scripted(&[]));
        assert_eq!(human.next_move(&Board::EMPTY), None);
    }
}
