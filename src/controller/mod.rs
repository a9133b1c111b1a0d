//! Players: strategies that choose moves, and the controller that plays them
//!
//! A [`Strategy`] looks at a board and picks a location for its player.
//! A [`Controller`] registers a strategy with a [`Game`] as a listener and
//! answers "your turn" notifications with the strategy's choice.

pub mod dumb;
pub mod interactive;
pub mod random;
pub mod smart;

use std::fmt;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::board::{Board, Location, Player};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Game, GameListener, Move};

pub use dumb::DumbAi;
pub use interactive::{Interactive, MoveSource};
pub use random::RandomAi;
pub use smart::{smart_ai, SmartAi};

/// Decides where one player marks next.
pub trait Strategy: Send {
    /// The player this strategy moves for
    fn player(&self) -> Player;

    /// Choose a blank cell on `board`, or None to decline.
    ///
    /// Only called on undecided boards when it is this player's turn.
    fn next_move(&mut self, board: &Board) -> Option<Location>;
}

impl Strategy for Box<dyn Strategy> {
    fn player(&self) -> Player {
        (**self).player()
    }

    fn next_move(&mut self, board: &Board) -> Option<Location> {
        (**self).next_move(board)
    }
}

/// Game listener that plays a strategy's moves on its turn.
pub struct Controller<S = Box<dyn Strategy>> {
    strategy: S,
    delay: Duration,
}

impl<S: Strategy> Controller<S> {
    /// Controller that answers immediately
    pub fn new(strategy: S) -> Self {
        Self::with_delay(strategy, Duration::ZERO)
    }

    /// Controller that pauses `delay` before every move
    pub fn with_delay(strategy: S, delay: Duration) -> Self {
        Self { strategy, delay }
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.strategy.player()
    }
}

impl<S: Strategy> GameListener for Controller<S> {
    fn game_changed(&mut self, game: &Game) -> Option<Move> {
        let me = self.strategy.player();
        if game.is_over() || game.next_turn() != me {
            return None;
        }

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        match self.strategy.next_move(game.board()) {
            Some(loc) => Some(Move::new(me, loc)),
            None => {
                debug!(player = %me, "strategy declined to move");
                None
            }
        }
    }
}

/// Who controls a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Dumb,
    Random,
    Smart,
}

impl PlayerKind {
    /// All kinds in menu order
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::Human,
        PlayerKind::Dumb,
        PlayerKind::Random,
        PlayerKind::Smart,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::Human => "a human",
            PlayerKind::Dumb => "the dumb AI",
            PlayerKind::Random => "the random AI",
            PlayerKind::Smart => "the smart AI",
        }
    }

    /// Kind for a 1-based menu choice
    pub fn from_choice(choice: usize) -> Option<PlayerKind> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    #[inline]
    pub fn is_human(self) -> bool {
        self == PlayerKind::Human
    }

    /// Build the automated strategy for this kind; None for humans.
    pub fn ai_strategy(
        self,
        me: Player,
        config: &GameConfig,
    ) -> Result<Option<Box<dyn Strategy>>, GameError> {
        let strategy: Box<dyn Strategy> = match self {
            PlayerKind::Human => return Ok(None),
            PlayerKind::Dumb => Box::new(DumbAi::new(me)),
            PlayerKind::Random => Box::new(RandomAi::new(me)),
            PlayerKind::Smart => Box::new(smart_ai(me, config.smart_depth)?),
        };
        Ok(Some(strategy))
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice() {
        assert_eq!(PlayerKind::from_choice(1), Some(PlayerKind::Human));
        assert_eq!(PlayerKind::from_choice(4), Some(PlayerKind::Smart));
        assert_eq!(PlayerKind::from_choice(0), None);
        assert_eq!(PlayerKind::from_choice(5), None);
    }

    #[test]
    fn test_ai_strategy_kinds() {
        let config = GameConfig::default();
        assert!(PlayerKind::Human
            .ai_strategy(Player::X, &config)
            .unwrap()
            .is_none());
        for kind in [PlayerKind::Dumb, PlayerKind::Random, PlayerKind::Smart] {
            let s = kind.ai_strategy(Player::O, &config).unwrap().unwrap();
            assert_eq!(s.player(), Player::O);
        }
    }

    #[test]
    fn test_ai_strategy_bad_depth() {
        let config = GameConfig {
            smart_depth: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            PlayerKind::Smart.ai_strategy(Player::X, &config).map(|_| ()),
            Err(GameError::InvalidDepth(0))
        );
    }

    #[test]
    fn test_controller_waits_for_its_turn() {
        let mut game = Game::new();
        game.add_listener(Controller::new(DumbAi::new(Player::O)))
            .unwrap();
        assert!(game.moves().is_empty());

        game.submit_move(Player::X, Location::center()).unwrap();
        // O answered at once with the first blank cell
        assert_eq!(game.moves().len(), 2);
        assert_eq!(
            game.last_move(),
            Some(Move::new(Player::O, Location::new(0, 0).unwrap()))
        );
        assert_eq!(game.next_turn(), Player::X);
    }

    #[test]
    fn test_two_controllers_play_to_the_end() {
        let mut game = Game::new();
        game.add_listener(Controller::new(DumbAi::new(Player::X)))
            .unwrap();
        game.add_listener(Controller::new(RandomAi::with_seed(Player::O, 7)))
            .unwrap();
        assert!(game.is_over());
    }
}
