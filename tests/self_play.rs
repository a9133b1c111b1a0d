//! Whole games driven through the public API

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use gomoku::board::{State, LOCATIONS};
use gomoku::console::{render_board, BoardPrinter, ConsoleInput};
use gomoku::controller::{smart_ai, Controller, DumbAi, Interactive, RandomAi};
use gomoku::{Board, Game, GameListener, Move, Player};

/// Checks every notification is a consistent successor of the previous one
#[derive(Default)]
struct Auditor {
    seen: Rc<RefCell<Vec<Board>>>,
}

impl GameListener for Auditor {
    fn game_changed(&mut self, game: &Game) -> Option<Move> {
        let board = *game.board();
        let mut seen = self.seen.borrow_mut();
        if let Some(prev) = seen.last() {
            assert_eq!(board.mark_count(), prev.mark_count() + 1);
            for &loc in LOCATIONS.iter() {
                if let Some(p) = prev.get(loc) {
                    assert_eq!(board.get(loc), Some(p));
                }
            }
        }
        seen.push(board);
        None
    }
}

#[test]
fn random_games_always_finish() {
    for seed in 0..20 {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut game = Game::new();
        game.add_listener(Auditor { seen: seen.clone() }).unwrap();
        game.add_listener(Controller::new(RandomAi::with_seed(Player::X, seed)))
            .unwrap();
        game.add_listener(Controller::new(RandomAi::with_seed(Player::O, seed + 100)))
            .unwrap();

        assert!(game.is_over(), "seed {seed}");
        assert_eq!(seen.borrow().len(), game.moves().len() + 1);
        match game.board().state() {
            State::HasWinner => {
                let v = game.board().winner().unwrap();
                assert_eq!(v.winner, game.last_move().unwrap().player);
                assert!(v.line.iter().all(|l| game.board().get(l) == Some(v.winner)));
            }
            State::Draw => assert_eq!(game.moves().len(), 81),
            State::NotOver => unreachable!(),
        }
    }
}

#[test]
fn smart_beats_dumb() {
    let mut game = Game::new();
    game.add_listener(Controller::new(DumbAi::new(Player::O)))
        .unwrap();
    game.add_listener(Controller::new(smart_ai(Player::X, 2).unwrap()))
        .unwrap();

    assert_eq!(game.board().state(), State::HasWinner);
    assert_eq!(game.board().winner().unwrap().winner, Player::X);
}

#[test]
fn smart_blocks_then_wins_against_random() {
    for seed in 0..3 {
        let mut game = Game::with_first(Player::O);
        game.add_listener(Controller::new(smart_ai(Player::X, 2).unwrap()))
            .unwrap();
        game.add_listener(Controller::new(RandomAi::with_seed(Player::O, seed)))
            .unwrap();
        assert!(game.is_over());
        assert_ne!(
            game.board().victory().map(|v| v.winner),
            Some(Player::O),
            "seed {seed}"
        );
    }
}

#[test]
fn scripted_console_game() {
    // X types its moves, O is the dumb AI filling row 0 from the left
    let script = "4 0\n4 1\nnonsense\n4 2\n0 0\n4 3\n4 4\n";
    let human = Interactive::new(Player::X, ConsoleInput::new(Cursor::new(script), Vec::new()));

    let mut game = Game::new();
    game.add_listener(Controller::new(human)).unwrap();
    game.add_listener(Controller::new(DumbAi::new(Player::O)))
        .unwrap();

    // the human's first move was played before O registered
    assert!(game.is_over());
    let victory = game.board().winner().unwrap();
    assert_eq!(victory.winner, Player::X);
    assert_eq!(victory.line.start(), gomoku::Location::new(4, 0).unwrap());

    let text = render_board(game.board());
    assert!(text.contains(" 4 |*X*|*X*|*X*|*X*|*X*|   |   |   |   |"));
    assert!(text.contains(" 0 | O | O | O | O |"));
}

#[test]
fn human_quitting_stops_the_game() {
    let human = Interactive::new(Player::X, ConsoleInput::new(Cursor::new("4 4\nquit\n"), Vec::new()));
    let mut game = Game::new();
    game.add_listener(BoardPrinter::new(Vec::new())).unwrap();
    game.add_listener(Controller::new(human)).unwrap();
    game.add_listener(Controller::new(DumbAi::new(Player::O)))
        .unwrap();

    assert!(!game.is_over());
    assert_eq!(game.moves().len(), 2);
    assert_eq!(game.next_turn(), Player::X);
}
