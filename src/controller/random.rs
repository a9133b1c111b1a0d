//! Uniformly random player

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Location, Player};

use super::Strategy;

/// Plays a blank cell chosen uniformly at random.
pub struct RandomAi {
    me: Player,
    rng: StdRng,
}

impl RandomAi {
    pub fn new(me: Player) -> Self {
        Self {
            me,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible player for tests and replays
    pub fn with_seed(me: Player, seed: u64) -> Self {
        Self {
            me,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomAi {
    fn player(&self) -> Player {
        self.me
    }

    fn next_move(&mut self, board: &Board) -> Option<Location> {
        let blanks: Vec<Location> = board.blanks().collect();
        blanks.choose(&mut self.rng).copied()
    }
}
