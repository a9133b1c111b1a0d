//! Evaluation module for five-in-a-row positions
//!
//! Positions are scored by counting the lines a player can still complete.
//! Overlapping lines through a shared cell are each counted, which rewards
//! cells that take part in many open lines.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{estimate, score, score_line, LineHeuristic};
pub use patterns::{line_value, LineScore};
