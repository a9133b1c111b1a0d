//! Win condition checking
//!
//! A line can only become complete through the mark just placed, so the
//! check is seeded at that location and scans the four directions from it.

use crate::board::{Board, Line, Location, Victory, SIZE};

/// Direction vectors for line checking, in the order victories are reported
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Row
    (1, 0),  // Column
    (1, 1),  // Diagonal "\"
    (-1, 1), // Diagonal "/"
];

/// Count consecutive cells matching the owner of `loc`, starting next to it
/// and stepping by (dr, dc) until a different cell or the edge.
#[inline]
fn count_from(board: &Board, loc: Location, dr: i32, dc: i32) -> i32 {
    let owner = board.get(loc);
    let mut n = 0;
    while let Some(next) = loc.offset(dr, dc, n + 1) {
        if board.get(next) != owner {
            break;
        }
        n += 1;
    }
    n
}

/// Length of the run through `loc` in direction (dr, dc), `loc` included.
#[inline]
pub fn run_length(board: &Board, loc: Location, dr: i32, dc: i32) -> i32 {
    1 + count_from(board, loc, dr, dc) + count_from(board, loc, -dr, -dc)
}

/// Return the victory going through `loc`, if any.
///
/// The reported line covers the first SIZE cells of the run, counted from
/// its end in the negative direction. When several lines complete at once
/// only the first direction in [`DIRECTIONS`] is reported.
pub fn victory_through(board: &Board, loc: Location) -> Option<Victory> {
    let winner = board.get(loc)?;

    for &(dr, dc) in &DIRECTIONS {
        if run_length(board, loc, dr, dc) >= SIZE as i32 {
            let back = count_from(board, loc, -dr, -dc);
            let start = loc.offset(-dr, -dc, back)?;
            let line = Line::new(start.row() as i32, start.col() as i32, dr, dc).ok()?;
            return Some(Victory { winner, line });
        }
    }

    None
}
