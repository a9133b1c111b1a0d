//! Game state management for the window front end
//!
//! Human moves arrive as clicks and are submitted directly. Automated
//! players think on a worker thread: their strategy is moved into the
//! thread, and comes back through a channel together with its choice, so
//! the window keeps repainting while the search runs.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::board::{Line, Location, Player};
use crate::config::GameConfig;
use crate::controller::{PlayerKind, Strategy};
use crate::error::GameError;
use crate::game::Game;

/// What a worker thread hands back
pub struct AiReply {
    pub player: Player,
    strategy: Box<dyn Strategy>,
    pub choice: Option<Location>,
    pub elapsed: Duration,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<AiReply>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
#[derive(Debug, Default)]
pub struct MoveTimer {
    pub ai_thinking_time: Option<Duration>,
}

impl MoveTimer {
    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

#[inline]
fn slot(player: Player) -> usize {
    match player {
        Player::X => 0,
        Player::O => 1,
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    /// Who plays X and O, as chosen in the side panel
    pub kinds: [PlayerKind; 2],
    pub started: bool,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    /// Set once an automated player declines; no further searches start
    declined: bool,
    ais: [Option<Box<dyn Strategy>>; 2],
    config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::with_first(config.first_player),
            kinds: [PlayerKind::Human, PlayerKind::Smart],
            started: false,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            declined: false,
            ais: [None, None],
            config,
        }
    }

    #[inline]
    pub fn kind(&self, player: Player) -> PlayerKind {
        self.kinds[slot(player)]
    }

    #[inline]
    pub fn set_kind(&mut self, player: Player, kind: PlayerKind) {
        self.kinds[slot(player)] = kind;
    }

    /// Begin a fresh game with the selected controllers.
    ///
    /// A search still running for the previous game is abandoned.
    pub fn start(&mut self) -> Result<(), GameError> {
        let mut ais = [None, None];
        for player in [Player::X, Player::O] {
            ais[slot(player)] = self.kind(player).ai_strategy(player, &self.config)?;
        }

        self.game = Game::with_first(self.config.first_player);
        self.ais = ais;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.message = None;
        self.declined = false;
        self.started = true;
        debug!(x = %self.kinds[0], o = %self.kinds[1], "new game");
        Ok(())
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Check if a human should click next
    pub fn is_human_turn(&self) -> bool {
        self.started && !self.is_over() && self.kind(self.game.next_turn()).is_human()
    }

    /// Check if an automated player moves next
    pub fn is_ai_turn(&self) -> bool {
        self.started && !self.is_over() && !self.kind(self.game.next_turn()).is_human()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.game.board().victory().map(|v| v.line)
    }

    pub fn last_move(&self) -> Option<Location> {
        self.game.last_move().map(|m| m.loc)
    }

    /// Attempt to mark `loc` for the human whose turn it is
    pub fn try_place(&mut self, loc: Location) -> Result<(), String> {
        if !self.started {
            return Err("Press Start to begin".to_string());
        }
        if self.is_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let player = self.game.next_turn();
        self.game
            .submit_move(player, loc)
            .map_err(|e| e.to_string())?;
        self.message = None;
        Ok(())
    }

    /// Hand the current AI's strategy to a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.declined {
            return;
        }

        let player = self.game.next_turn();
        let Some(mut strategy) = self.ais[slot(player)].take() else {
            warn!(%player, "no strategy for automated player");
            return;
        };

        let board = *self.game.board();
        let delay = self.config.ai_delay;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let start = Instant::now();
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            let choice = strategy.next_move(&board);
            let _ = tx.send(AiReply {
                player,
                strategy,
                choice,
                elapsed: start.elapsed(),
            });
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and play its move
    pub fn check_ai_result(&mut self) {
        let reply = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(reply) => reply,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(reply.elapsed);
        self.ais[slot(reply.player)] = Some(reply.strategy);

        match reply.choice {
            Some(loc) => {
                if let Err(e) = self.game.submit_move(reply.player, loc) {
                    warn!(error = %e, "AI move rejected");
                    self.message = Some(e.to_string());
                }
            }
            None => {
                debug!(player = %reply.player, "automated player declined");
                self.declined = true;
                self.message = Some(format!("{} has no move", reply.player));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
