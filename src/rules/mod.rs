//! Game rules for five-in-a-row
//!
//! A player wins by owning SIZE consecutive cells along a row, column or
//! diagonal. Longer runs also win. There are no captures or forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{run_length, victory_through, DIRECTIONS};
