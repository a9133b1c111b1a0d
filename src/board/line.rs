//! Five-cell line segments used for win checking and evaluation

use std::fmt;

use once_cell::sync::Lazy;

use super::{Bitboard, Location, NUM_COLS, NUM_ROWS};
use crate::error::GameError;

/// Number of marks in a row required for victory
pub const SIZE: usize = 5;

/// Every 5-cell horizontal, vertical and diagonal segment on the board (140 on 9x9).
///
/// Order: horizontal, vertical, north-east, south-east; row-major within each group.
pub static ALL_LINES: Lazy<Vec<Line>> = Lazy::new(|| {
    let size = SIZE as i32;
    let rows = NUM_ROWS as i32;
    let cols = NUM_COLS as i32;
    let mut lines = Vec::with_capacity(140);

    // Start bounds follow from keeping the far end on the board:
    //   c + (SIZE-1) < NUM_COLS, r + (SIZE-1) < NUM_ROWS, r - (SIZE-1) >= 0
    for r in 0..rows {
        for c in 0..=cols - size {
            lines.push(Line::build(r, c, 0, 1));
        }
    }
    for r in 0..=rows - size {
        for c in 0..cols {
            lines.push(Line::build(r, c, 1, 0));
        }
    }
    for r in size - 1..rows {
        for c in 0..=cols - size {
            lines.push(Line::build(r, c, -1, 1));
        }
    }
    for r in 0..=rows - size {
        for c in 0..=cols - size {
            lines.push(Line::build(r, c, 1, 1));
        }
    }

    lines
});

/// SIZE contiguous locations along a row, column or diagonal:
/// (r, c), (r+dr, c+dc), ..., (r+4dr, c+4dc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    row: i8,
    col: i8,
    dr: i8,
    dc: i8,
    mask: Bitboard,
}

impl Line {
    /// Create a line starting at (row, col) heading in direction (dr, dc).
    ///
    /// Fails if either end leaves the board or the direction is not one of
    /// the eight unit steps.
    pub fn new(row: i32, col: i32, dr: i32, dc: i32) -> Result<Self, GameError> {
        let last = SIZE as i32 - 1;
        Location::new(row, col)?;
        Location::new(row + last * dr, col + last * dc)?;

        if !(-1..=1).contains(&dr) || !(-1..=1).contains(&dc) || (dr == 0 && dc == 0) {
            return Err(GameError::InvalidDirection { dr, dc });
        }

        Ok(Self::build(row, col, dr, dc))
    }

    /// Construct without validation; callers guarantee both ends are on the board.
    pub(crate) fn build(row: i32, col: i32, dr: i32, dc: i32) -> Self {
        let mut mask = Bitboard::new();
        for n in 0..SIZE as i32 {
            let r = row + n * dr;
            let c = col + n * dc;
            debug_assert!(Location::is_valid(r, c));
            mask.set(Location {
                row: r as u8,
                col: c as u8,
            });
        }
        Self {
            row: row as i8,
            col: col as i8,
            dr: dr as i8,
            dc: dc as i8,
            mask,
        }
    }

    /// First location of the line
    #[inline]
    pub fn start(&self) -> Location {
        Location {
            row: self.row as u8,
            col: self.col as u8,
        }
    }

    /// Step between consecutive locations
    #[inline]
    pub fn direction(&self) -> (i32, i32) {
        (self.dr as i32, self.dc as i32)
    }

    /// The line's cells as a bitboard
    #[inline]
    pub fn mask(&self) -> Bitboard {
        self.mask
    }

    /// Iterate over the SIZE locations in order from the start
    pub fn iter(&self) -> LineIter {
        LineIter {
            line: *self,
            step: 0,
        }
    }

    /// Return true if (row, col) is one of the line's locations.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let (r0, c0) = (self.row as i32, self.col as i32);
        let (dr, dc) = self.direction();

        // (row, col) = (r0, c0) + n(dr, dc)  =>  n*dr*dc = (row-r0)*dc = (col-c0)*dr.
        // Still holds when one of dr, dc is 0; they are never both 0.
        let collinear = dc * (row - r0) == dr * (col - c0);
        if !collinear {
            return false;
        }

        let n = if dr != 0 { (row - r0) / dr } else { (col - c0) / dc };
        (0..SIZE as i32).contains(&n)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, loc) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{loc}")?;
        }
        Ok(())
    }
}

impl IntoIterator for &Line {
    type Item = Location;
    type IntoIter = LineIter;

    fn into_iter(self) -> LineIter {
        self.iter()
    }
}

/// Iterator over the locations of a Line
pub struct LineIter {
    line: Line,
    step: i8,
}

impl Iterator for LineIter {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.step as usize >= SIZE {
            return None;
        }
        let n = self.step;
        self.step += 1;
        Some(Location {
            row: (self.line.row + n * self.line.dr) as u8,
            col: (self.line.col + n * self.line.dc) as u8,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = SIZE - self.step as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for LineIter {}
