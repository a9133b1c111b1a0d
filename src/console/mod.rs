//! Console front end
//!
//! The board is printed to stdout after every change; human players type
//! `row col` at a prompt. Setup asks which kind of controller plays each
//! side, then the controllers drive the game to its end.

pub mod input;
pub mod printer;

use std::io::{self, Write};

use tracing::info;

use crate::board::Player;
use crate::config::GameConfig;
use crate::controller::{Controller, Interactive, PlayerKind, Strategy};
use crate::error::GameError;
use crate::game::Game;

pub use input::{choose_kind, menu_line, parse_location, ConsoleInput, InputError, LineSource};
pub use printer::{render_board, status_line, BoardPrinter};

/// Controller for `player`: a console prompt for humans, an AI otherwise.
pub fn console_controller(
    player: Player,
    kind: PlayerKind,
    config: &GameConfig,
) -> Result<Controller, GameError> {
    match kind.ai_strategy(player, config)? {
        Some(ai) => Ok(Controller::with_delay(ai, config.ai_delay)),
        None => {
            let human: Box<dyn Strategy> =
                Box::new(Interactive::new(player, ConsoleInput::stdio()));
            Ok(Controller::new(human))
        }
    }
}

/// Ask for both controllers on stdin, then play a game to completion.
///
/// Returns the finished (or abandoned) game, or None if input ended
/// during setup.
pub fn run(config: &GameConfig) -> Result<Option<Game>, Box<dyn std::error::Error>> {
    let mut stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut kinds = Vec::with_capacity(2);
    for player in [Player::X, Player::O] {
        match choose_kind(player, &mut stdin, &mut stdout)? {
            Some(kind) => kinds.push((player, kind)),
            None => return Ok(None),
        }
    }
    stdout.flush()?;

    let mut game = Game::with_first(config.first_player);
    game.add_listener(BoardPrinter::stdout())?;
    for (player, kind) in kinds {
        info!(%player, %kind, "controller selected");
        game.add_listener(console_controller(player, kind, config)?)?;
    }
    Ok(Some(game))
}
