//! Five-in-a-row on a 9x9 board
//!
//! Two players, X and O, take turns marking blank cells; the first to own
//! five cells in a straight horizontal, vertical or diagonal run wins, and a
//! full board without such a run is a draw.
//!
//! # Architecture
//!
//! - [`board`]: immutable boards over bitboards, locations, the 140 lines
//! - [`rules`]: win detection around the newest mark
//! - [`eval`]: open-line heuristic
//! - [`search`]: fixed-depth minimax and the adjacency move filter
//! - [`game`]: turn order and change notification
//! - [`controller`]: human, dumb, random and minimax players
//! - [`console`] and [`ui`]: terminal and window front ends
//! - [`config`], [`logging`], [`error`]: ambient plumbing
//!
//! # Quick Start
//!
//! ```
//! use gomoku::controller::{Controller, DumbAi, RandomAi};
//! use gomoku::{Game, Player};
//!
//! let mut game = Game::new();
//! game.add_listener(Controller::new(DumbAi::new(Player::X))).unwrap();
//! game.add_listener(Controller::new(RandomAi::with_seed(Player::O, 1))).unwrap();
//!
//! // the two controllers played each other to the end
//! assert!(game.is_over());
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod eval;
pub mod game;
pub mod logging;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Line, Location, Player, State, Victory, ALL_LINES, NUM_COLS, NUM_ROWS};
pub use config::GameConfig;
pub use error::GameError;
pub use game::{Game, GameListener, Move};
