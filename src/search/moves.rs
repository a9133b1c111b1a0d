//! Candidate move generation
//!
//! Five-in-a-row usually has 70+ legal moves, but a cell far from every
//! mark is rarely worth playing. Searching only cells next to existing
//! marks keeps the branching factor small.

use once_cell::sync::Lazy;

use crate::board::{Bitboard, Board, Location, LOCATIONS, TOTAL_CELLS};

/// For each cell, the bitboard of its (up to 8) neighbours.
static NEIGHBORS: Lazy<[Bitboard; TOTAL_CELLS]> = Lazy::new(|| {
    let mut table = [Bitboard::new(); TOTAL_CELLS];
    for &loc in LOCATIONS.iter() {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(n) = loc.offset(dr, dc, 1) {
                    table[loc.to_index()].set(n);
                }
            }
        }
    }
    table
});

/// True iff `loc` is blank and touches a played cell (including diagonally).
#[inline]
pub fn is_reasonable_move(board: &Board, loc: Location) -> bool {
    board.is_blank(loc) && NEIGHBORS[loc.to_index()].intersects(board.occupied())
}

/// Blank cells adjacent to played cells, in row-major order.
///
/// Falls back to the centre when nothing qualifies (the empty board), or to
/// the first blank cell if the centre is taken. Empty only on a full board.
pub fn adjacent_moves(board: &Board) -> Vec<Location> {
    let moves: Vec<Location> = board
        .blanks()
        .filter(|&loc| is_reasonable_move(board, loc))
        .collect();
    if !moves.is_empty() {
        return moves;
    }

    let center = Location::center();
    if board.is_blank(center) {
        vec![center]
    } else {
        board.blanks().take(1).collect()
    }
}
