//! Five-in-a-row at the console
//!
//! Asks who plays X and O, then runs the game until it ends or a human
//! types `exit`/`quit`.

use gomoku::config::GameConfig;
use gomoku::{console, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let config = GameConfig::from_env()?;
    tracing::info!(?config, "starting console game");

    if let Some(game) = console::run(&config)? {
        tracing::info!(moves = game.moves().len(), state = ?game.board().state(), "game finished");
    }
    Ok(())
}
