//! Bitboard implementation for fast line and neighbour tests

use super::{Location, TOTAL_CELLS};

/// Mask with one bit for every cell of the 9x9 grid
const FULL: u128 = (1u128 << TOTAL_CELLS) - 1;

/// Bitboard representation of a set of cells.
/// A single u128 covers all 81 cells (bit index = row * 9 + col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u128,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Bitboard with every cell set
    pub const fn full() -> Self {
        Self { bits: FULL }
    }

    /// Set a bit at location
    #[inline]
    pub fn set(&mut self, loc: Location) {
        self.bits |= 1u128 << loc.to_index();
    }

    /// Copy of this bitboard with `loc` set
    #[inline]
    #[must_use]
    pub fn with(self, loc: Location) -> Self {
        Self {
            bits: self.bits | (1u128 << loc.to_index()),
        }
    }

    /// Check if bit is set at location
    #[inline]
    pub fn get(&self, loc: Location) -> bool {
        (self.bits >> loc.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True if any cell is set in both bitboards
    #[inline]
    pub fn intersects(&self, other: Bitboard) -> bool {
        self.bits & other.bits != 0
    }

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    #[inline]
    pub fn intersection(self, other: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits & other.bits,
        }
    }

    /// Cells of the grid not set in this bitboard
    #[inline]
    pub fn complement(self) -> Bitboard {
        Bitboard {
            bits: !self.bits & FULL,
        }
    }

    /// Iterate over set bit locations in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u128,
}

impl Iterator for BitboardIter {
    type Item = Location;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        // Get position of lowest set bit, then clear it
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;

        Some(Location::from_index(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(r: i32, c: i32) -> Location {
        Location::new(r, c).unwrap()
    }

    #[test]
    fn test_set_and_get() {
        let mut bb = Bitboard::new();
        assert!(bb.is_empty());
        bb.set(loc(8, 8));
        bb.set(loc(0, 3));
        assert!(bb.get(loc(8, 8)));
        assert!(bb.get(loc(0, 3)));
        assert!(!bb.get(loc(3, 0)));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn test_iter_ones_is_row_major() {
        let bb = Bitboard::new()
            .with(loc(4, 4))
            .with(loc(0, 8))
            .with(loc(8, 0));
        let cells: Vec<Location> = bb.iter_ones().collect();
        assert_eq!(cells, vec![loc(0, 8), loc(4, 4), loc(8, 0)]);
    }

    #[test]
    fn test_complement_stays_on_grid() {
        let bb = Bitboard::new().with(loc(2, 2));
        let rest = bb.complement();
        assert_eq!(rest.count(), TOTAL_CELLS as u32 - 1);
        assert!(!rest.get(loc(2, 2)));
        assert_eq!(Bitboard::full().complement().count(), 0);
    }
}
