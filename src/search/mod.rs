//! Search module for the five-in-a-row AI
//!
//! Contains:
//! - Plain fixed-depth minimax over immutable boards
//! - The adjacency filter that restricts which moves are searched

pub mod minimax;
pub mod moves;

pub use minimax::{Evaluator, Minimax, SearchResult, LOSS_SCORE, WIN_SCORE};
pub use moves::{adjacent_moves, is_reasonable_move};
