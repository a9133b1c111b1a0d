//! Fixed-depth minimax search
//!
//! This module implements the core search algorithm for the AI players.
//! Every position is scored recursively: a won game is worth [`WIN_SCORE`]
//! to the winner and [`LOSS_SCORE`] to the loser, a draw is worth 0, and a
//! position where the depth runs out is scored by the [`Evaluator`]. The
//! searching player takes the maximum over its moves, the opponent the
//! minimum.
//!
//! Two knobs keep the tree small: the evaluator decides which moves are
//! worth considering at all, and the search stops after a fixed number of
//! plies. There is no pruning and no transposition table.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Player};
//! use gomoku::eval::LineHeuristic;
//! use gomoku::search::Minimax;
//!
//! let engine = Minimax::new(Player::X, 2, LineHeuristic).unwrap();
//! let result = engine.search(&Board::EMPTY);
//! assert_eq!(result.best_move, Some(gomoku::board::Location::center()));
//! ```

use tracing::{instrument, trace};

use crate::board::{Board, Location, Player, State};
use crate::error::GameError;

/// Score of a board won by the searching player
pub const WIN_SCORE: i32 = i32::MAX;
/// Score of a board won by the opponent
pub const LOSS_SCORE: i32 = i32::MIN;

/// Pluggable position knowledge for [`Minimax`].
pub trait Evaluator: Send {
    /// Static value of `board` for `me`; larger is better for `me`.
    /// Must stay strictly between [`LOSS_SCORE`] and [`WIN_SCORE`].
    fn estimate(&self, board: &Board, me: Player) -> i32;

    /// Blank cells worth searching. Must be non-empty whenever the board
    /// has a blank cell.
    fn candidate_moves(&self, board: &Board) -> Vec<Location>;
}

/// Search result containing the chosen move and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; None when no move is available
    pub best_move: Option<Location>,
    /// Minimax value of the best move
    pub score: i32,
    /// Boards created during the search
    pub nodes: u64,
}

/// Minimax searcher playing for one player.
#[derive(Debug, Clone)]
pub struct Minimax<E> {
    me: Player,
    depth: u32,
    evaluator: E,
}

impl<E: Evaluator> Minimax<E> {
    /// Create a searcher for `me` that looks `depth` plies ahead.
    ///
    /// A larger depth plays better but takes exponentially longer.
    pub fn new(me: Player, depth: u32, evaluator: E) -> Result<Self, GameError> {
        if depth == 0 {
            return Err(GameError::InvalidDepth(depth));
        }
        Ok(Self {
            me,
            depth,
            evaluator,
        })
    }

    #[inline]
    pub fn me(&self) -> Player {
        self.me
    }

    /// Minimax value of `board` for `me` when `acting` moves next and
    /// `remaining` plies may still be played.
    pub fn score(&self, acting: Player, board: &Board, remaining: u32) -> i32 {
        let mut nodes = 0;
        self.score_node(acting, board, remaining, &mut nodes)
    }

    /// Choose the candidate move with the highest minimax value.
    ///
    /// Ties go to the candidate listed first by the evaluator.
    #[instrument(skip(self, board), fields(me = %self.me, depth = self.depth))]
    pub fn search(&self, board: &Board) -> SearchResult {
        let mut nodes = 0u64;

        if let Some(value) = self.terminal_value(board) {
            return SearchResult {
                best_move: None,
                score: value,
                nodes,
            };
        }

        let mut best: Option<(Location, i32)> = None;
        for loc in self.evaluator.candidate_moves(board) {
            let Ok(child) = board.update(self.me, loc) else {
                trace!(%loc, "skipping unplayable candidate");
                continue;
            };
            nodes += 1;
            let value = self.child_value(self.me, &child, self.depth, &mut nodes);
            trace!(%loc, value, "root candidate");
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((loc, value));
            }
        }

        match best {
            Some((loc, score)) => SearchResult {
                best_move: Some(loc),
                score,
                nodes,
            },
            None => SearchResult {
                best_move: None,
                score: self.evaluator.estimate(board, self.me),
                nodes,
            },
        }
    }

    /// Value of a decided board, or None if play continues
    #[inline]
    fn terminal_value(&self, board: &Board) -> Option<i32> {
        match board.state() {
            State::NotOver => None,
            State::Draw => Some(0),
            State::HasWinner => Some(match board.victory() {
                Some(v) if v.winner == self.me => WIN_SCORE,
                _ => LOSS_SCORE,
            }),
        }
    }

    /// Value of `child`, reached by `acting` with `remaining` plies left
    /// counting the move that produced it.
    #[inline]
    fn child_value(&self, acting: Player, child: &Board, remaining: u32, nodes: &mut u64) -> i32 {
        if remaining <= 1 {
            self.terminal_value(child)
                .unwrap_or_else(|| self.evaluator.estimate(child, self.me))
        } else {
            self.score_node(acting.opponent(), child, remaining - 1, nodes)
        }
    }

    fn score_node(&self, acting: Player, board: &Board, remaining: u32, nodes: &mut u64) -> i32 {
        if let Some(value) = self.terminal_value(board) {
            return value;
        }
        if remaining == 0 {
            return self.evaluator.estimate(board, self.me);
        }

        let maximizing = acting == self.me;
        let mut best: Option<i32> = None;

        for loc in self.evaluator.candidate_moves(board) {
            let Ok(child) = board.update(acting, loc) else {
                continue;
            };
            *nodes += 1;
            let value = self.child_value(acting, &child, remaining, nodes);
            best = Some(match best {
                None => value,
                Some(b) if maximizing => b.max(value),
                Some(b) => b.min(value),
            });
        }

        // A filter that offers nothing leaves the static estimate
        best.unwrap_or_else(|| self.evaluator.estimate(board, self.me))
    }
}
