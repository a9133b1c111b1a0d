//! Open-line heuristic evaluation
//!
//! This module provides the static evaluation used when the minimax search
//! runs out of depth, and the candidate filter that keeps the search narrow.

use crate::board::{Board, Line, Location, Player, ALL_LINES};
use crate::search::{adjacent_moves, Evaluator};

use super::patterns::line_value;

/// Score of `line` for `player`: 0 if the opponent has a mark on it,
/// otherwise `10^(k-1)` for `k >= 1` marks of `player`.
#[inline]
pub fn score_line(board: &Board, player: Player, line: &Line) -> i32 {
    let mask = line.mask();
    if board.marks(player.opponent()).intersects(mask) {
        return 0;
    }
    line_value(board.marks(player).intersection(mask).count())
}

/// Positive score for `player`: the sum of [`score_line`] over every line.
///
/// Lines sharing a cell are all counted, so a lone mark in the centre is
/// worth 20 (twenty lines pass through it) and a corner mark only 3.
#[must_use]
pub fn score(board: &Board, player: Player) -> i32 {
    ALL_LINES
        .iter()
        .map(|line| score_line(board, player, line))
        .sum()
}

/// How good `board` looks for `me`: my score minus the opponent's.
#[must_use]
pub fn estimate(board: &Board, me: Player) -> i32 {
    score(board, me) - score(board, me.opponent())
}

/// Evaluator pairing the open-line estimate with the adjacency move filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineHeuristic;

impl Evaluator for LineHeuristic {
    fn estimate(&self, board: &Board, me: Player) -> i32 {
        estimate(board, me)
    }

    fn candidate_moves(&self, board: &Board) -> Vec<Location> {
        adjacent_moves(board)
    }
}
