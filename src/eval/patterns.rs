//! Per-line scores for the open-line heuristic
//!
//! A line is "winnable" for a player while it holds none of the opponent's
//! marks. Its value grows tenfold with every mark the player has on it.

/// Value of one winnable line by number of the player's marks on it
pub struct LineScore;

impl LineScore {
    /// No marks yet
    pub const EMPTY: i32 = 0;
    pub const ONE: i32 = 1;
    pub const TWO: i32 = 10;
    pub const THREE: i32 = 100;
    pub const FOUR: i32 = 1_000;
    /// Completed line
    pub const FIVE: i32 = 10_000;

    /// Indexed by mark count (0..=5)
    pub const TABLE: [i32; 6] = [
        Self::EMPTY,
        Self::ONE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
    ];
}

/// `10^count / 10` in integer arithmetic: 0 for an empty line, `10^(count-1)` otherwise.
#[inline]
pub fn line_value(count: u32) -> i32 {
    LineScore::TABLE[count.min(5) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_value_matches_integer_division() {
        for k in 0..=5u32 {
            assert_eq!(line_value(k), 10i32.pow(k) / 10);
        }
    }

    #[test]
    fn test_score_hierarchy() {
        assert!(LineScore::TABLE.windows(2).all(|w| w[0] < w[1]));
    }
}
