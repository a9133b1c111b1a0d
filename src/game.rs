//! Turn sequencing and change notification
//!
//! A [`Game`] owns the current [`Board`] and knows whose turn is next.
//! Views and players register as [`GameListener`]s and are told about every
//! change, in registration order. A listener may answer a notification with
//! a [`Move`]; the game applies it and notifies everyone again. Automated
//! players therefore keep the game going by themselves until it ends or
//! nobody answers.
//!
//! The notification chain runs as a loop rather than by re-entering
//! `submit_move`, so a whole game between two AIs uses constant stack.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Location, Player};
//! use gomoku::game::Game;
//!
//! let mut game = Game::new();
//! game.submit_move(Player::X, Location::center()).unwrap();
//! assert_eq!(game.next_turn(), Player::O);
//! assert!(game.submit_move(Player::X, Location::new(0, 0).unwrap()).is_err());
//! ```

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Location, Player, State};
use crate::error::GameError;

/// A mark placed by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub player: Player,
    pub loc: Location,
}

impl Move {
    #[inline]
    pub fn new(player: Player, loc: Location) -> Self {
        Self { player, loc }
    }
}

/// Anything that wants to react whenever a game changes.
pub trait GameListener {
    /// Observe the game after a change (and once on registration).
    ///
    /// Return `Some(move)` to submit a move in response; views return `None`.
    fn game_changed(&mut self, game: &Game) -> Option<Move>;
}

/// The state of a game: the board, whose turn it is, and who is watching.
pub struct Game {
    board: Board,
    next: Player,
    moves: Vec<Move>,
    listeners: Vec<Box<dyn GameListener>>,
}

impl Game {
    /// Create a game with an empty board; X goes first.
    pub fn new() -> Self {
        Self::with_first(Player::X)
    }

    /// Create a game with an empty board; `first` goes first.
    pub fn with_first(first: Player) -> Self {
        Self {
            board: Board::EMPTY,
            next: first,
            moves: Vec::new(),
            listeners: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who should play next
    #[inline]
    pub fn next_turn(&self) -> Player {
        self.next
    }

    /// Moves applied so far, oldest first
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.state() != State::NotOver
    }

    /// Register a listener and notify it of the current state right away.
    ///
    /// If the listener answers with a move, play continues from here, so
    /// adding an AI whose turn it is starts the game. Errors come from moves
    /// submitted by listeners during that play.
    pub fn add_listener<L>(&mut self, listener: L) -> Result<(), GameError>
    where
        L: GameListener + 'static,
    {
        let mut listener: Box<dyn GameListener> = Box::new(listener);
        let reply = listener.game_changed(self);
        self.listeners.push(listener);
        self.run(reply)
    }

    /// Play `loc` for `player`, then notify every listener.
    ///
    /// Fails with `OutOfTurn` if `player` is not next, or with the board's
    /// `IllegalMove`, in which case the game is untouched. Moves that
    /// listeners submit in response are played before this returns. The
    /// first of them to fail is reported here, and then the caller's move
    /// stands along with every answer played before the failure.
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn submit_move(&mut self, player: Player, loc: Location) -> Result<(), GameError> {
        self.run(Some(Move::new(player, loc)))
    }

    /// Apply `pending` and every move listeners answer with, one round at a time.
    fn run(&mut self, mut pending: Option<Move>) -> Result<(), GameError> {
        while let Some(mv) = pending.take() {
            self.apply(mv)?;
            pending = self.notify();
        }
        Ok(())
    }

    fn apply(&mut self, mv: Move) -> Result<(), GameError> {
        if mv.player != self.next {
            return Err(GameError::OutOfTurn {
                player: mv.player,
                expected: self.next,
            });
        }

        self.board = self.board.update(mv.player, mv.loc)?;
        self.next = self.next.opponent();
        self.moves.push(mv);
        debug!(player = %mv.player, loc = %mv.loc, moves = self.moves.len(), "move applied");

        match self.board.state() {
            State::HasWinner => {
                if let Some(v) = self.board.victory() {
                    info!(winner = %v.winner, line = %v.line, "game won");
                }
            }
            State::Draw => info!("game drawn"),
            State::NotOver => {}
        }
        Ok(())
    }

    /// Tell every listener about the current state; return the first answer.
    fn notify(&mut self) -> Option<Move> {
        let mut listeners = std::mem::take(&mut self.listeners);
        let mut reply = None;
        for listener in listeners.iter_mut() {
            if let Some(mv) = listener.game_changed(self) {
                if reply.is_none() {
                    reply = Some(mv);
                } else {
                    warn!(player = %mv.player, loc = %mv.loc, "extra move in one round ignored");
                }
            }
        }
        self.listeners = listeners;
        reply
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn loc(r: i32, c: i32) -> Location {
        Location::new(r, c).unwrap()
    }

    /// Records (mark count, next player) for every notification
    struct Recorder(Rc<RefCell<Vec<(u32, Player)>>>);

    impl GameListener for Recorder {
        fn game_changed(&mut self, game: &Game) -> Option<Move> {
            self.0
                .borrow_mut()
                .push((game.board().mark_count(), game.next_turn()));
            None
        }
    }

    /// Plays the first blank cell whenever it is `me`'s turn
    struct FirstBlank(Player);

    impl GameListener for FirstBlank {
        fn game_changed(&mut self, game: &Game) -> Option<Move> {
            if game.is_over() || game.next_turn() != self.0 {
                return None;
            }
            game.board().blanks().next().map(|l| Move::new(self.0, l))
        }
    }

    /// Always answers with the same cell
    struct Stubborn(Move);

    impl GameListener for Stubborn {
        fn game_changed(&mut self, _game: &Game) -> Option<Move> {
            Some(self.0)
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        let cells = [(0, 0), (1, 1), (2, 5), (7, 3), (8, 8)];
        for (n, &(r, c)) in cells.iter().enumerate() {
            let expected = if n % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(game.next_turn(), expected);
            game.submit_move(expected, loc(r, c)).unwrap();
        }
        assert_eq!(game.next_turn(), Player::O);
        assert_eq!(game.moves().len(), 5);
        assert_eq!(game.last_move(), Some(Move::new(Player::X, loc(8, 8))));
    }

    #[test]
    fn test_with_first_player() {
        let mut game = Game::with_first(Player::O);
        assert_eq!(game.next_turn(), Player::O);
        game.submit_move(Player::O, loc(4, 4)).unwrap();
        assert_eq!(game.next_turn(), Player::X);
    }

    #[test]
    fn test_out_of_turn_leaves_state() {
        let mut game = Game::new();
        game.submit_move(Player::X, loc(4, 4)).unwrap();
        let before = *game.board();
        assert_eq!(
            game.submit_move(Player::X, loc(0, 0)),
            Err(GameError::OutOfTurn {
                player: Player::X,
                expected: Player::O
            })
        );
        assert_eq!(*game.board(), before);
        assert_eq!(game.next_turn(), Player::O);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_illegal_move_leaves_state() {
        let mut game = Game::new();
        game.submit_move(Player::X, loc(4, 4)).unwrap();
        let err = game.submit_move(Player::O, loc(4, 4)).unwrap_err();
        assert!(err.is_illegal_move());
        assert_eq!(game.next_turn(), Player::O);
        assert_eq!(game.board().get(loc(4, 4)), Some(Player::X));
    }

    #[test]
    fn test_listener_notified_on_registration_and_changes() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut game = Game::new();
        game.add_listener(Recorder(log.clone())).unwrap();
        assert_eq!(*log.borrow(), vec![(0, Player::X)]);

        game.submit_move(Player::X, loc(0, 0)).unwrap();
        game.submit_move(Player::O, loc(0, 1)).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![(0, Player::X), (1, Player::O), (2, Player::X)]
        );
    }

    #[test]
    fn test_failed_move_does_not_notify() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut game = Game::new();
        game.add_listener(Recorder(log.clone())).unwrap();
        assert!(game.submit_move(Player::O, loc(0, 0)).is_err());
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_automated_players_finish_the_game() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut game = Game::new();
        game.add_listener(Recorder(log.clone())).unwrap();
        game.add_listener(FirstBlank(Player::X)).unwrap();
        // only X is automated so far: one move, then O's turn
        assert_eq!(game.moves().len(), 1);
        game.add_listener(FirstBlank(Player::O)).unwrap();

        // the recorder saw every intermediate board exactly once
        assert!(game.is_over());
        let seen = log.borrow();
        assert_eq!(seen.len(), game.moves().len() + 1);
        for (i, &(marks, _)) in seen.iter().enumerate() {
            assert_eq!(marks as usize, i);
        }
    }

    #[test]
    fn test_listener_error_reported_to_caller() {
        let mut game = Game::new();
        game.submit_move(Player::X, loc(0, 0)).unwrap();
        // answers with X again while O is next
        let result = game.add_listener(Stubborn(Move::new(Player::X, loc(5, 5))));
        assert_eq!(
            result,
            Err(GameError::OutOfTurn {
                player: Player::X,
                expected: Player::O
            })
        );
        assert_eq!(game.moves().len(), 1);
    }

    /// Answers once, with `reply`, as soon as the board holds a mark
    struct AnswersFirstMove(Option<Move>);

    impl GameListener for AnswersFirstMove {
        fn game_changed(&mut self, game: &Game) -> Option<Move> {
            if game.board().mark_count() == 0 {
                return None;
            }
            self.0.take()
        }
    }

    #[test]
    fn test_failed_answer_keeps_callers_move() {
        let mut game = Game::new();
        game.add_listener(AnswersFirstMove(Some(Move::new(Player::X, loc(5, 5)))))
            .unwrap();

        let result = game.submit_move(Player::X, loc(0, 0));
        assert_eq!(
            result,
            Err(GameError::OutOfTurn {
                player: Player::X,
                expected: Player::O
            })
        );
        assert_eq!(game.moves().len(), 1);
        assert_eq!(game.board().get(loc(0, 0)), Some(Player::X));
        assert_eq!(game.board().get(loc(5, 5)), None);
        assert_eq!(game.next_turn(), Player::O);
    }

    #[test]
    fn test_move_after_game_over_fails() {
        let mut game = Game::new();
        for c in 0..4 {
            game.submit_move(Player::X, loc(0, c)).unwrap();
            game.submit_move(Player::O, loc(1, c)).unwrap();
        }
        game.submit_move(Player::X, loc(0, 4)).unwrap();
        assert!(game.is_over());
        assert_eq!(game.board().winner().unwrap().winner, Player::X);
        assert!(game.submit_move(Player::O, loc(8, 8)).is_err());
    }
}
