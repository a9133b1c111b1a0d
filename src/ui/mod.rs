//! Window front end built on egui/eframe.
//!
//! Pick a controller for X and O, press Start, and click cells to play.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{AiReply, AiState, GameState, MoveTimer};
