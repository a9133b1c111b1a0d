//! Text rendering of boards and game status

use std::fmt::Write as _;
use std::io::Write;

use tracing::warn;

use crate::board::{Board, State, NUM_COLS, NUM_ROWS};
use crate::game::{Game, GameListener, Move};

/// Render `board` as a grid with row and column headings.
///
/// Cells of a winning line are flanked by `*`:
///
/// ```text
///      0   1   2
///    +---+---+---+
///  0 |*X*|   | O |
///    +---+---+---+
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    let wins = board.victory().map(|v| v.line);

    out.push_str("  ");
    for col in 0..NUM_COLS {
        let _ = write!(out, "   {col}");
    }
    out.push('\n');
    push_separator(&mut out);

    for row in 0..NUM_ROWS {
        let _ = write!(out, " {row} ");
        for col in 0..NUM_COLS {
            let (r, c) = (row as i32, col as i32);
            let mark = match wins {
                Some(line) if line.contains(r, c) => '*',
                _ => ' ',
            };
            let cell = match board.get_at(r, c) {
                Some(player) => player.to_string(),
                None => " ".to_string(),
            };
            let _ = write!(out, "|{mark}{cell}{mark}");
        }
        out.push_str("|\n");
        push_separator(&mut out);
    }
    out
}

fn push_separator(out: &mut String) {
    out.push_str("   ");
    for _ in 0..NUM_COLS {
        out.push_str("+---");
    }
    out.push_str("+\n");
}

/// One-line summary: the winner, a draw, or whose turn it is.
pub fn status_line(game: &Game) -> String {
    let board = game.board();
    match board.state() {
        State::HasWinner => match board.victory() {
            Some(v) => format!("{} wins!", v.winner),
            None => "Game over".to_string(),
        },
        State::Draw => "Game ended in a draw!".to_string(),
        State::NotOver => format!("It is {}'s turn", game.next_turn()),
    }
}

/// Listener that prints the board every time the game changes.
pub struct BoardPrinter<W> {
    out: W,
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn print(&mut self, game: &Game) -> std::io::Result<()> {
        writeln!(self.out, "{}\n\n", "-".repeat(80))?;
        writeln!(self.out, "Current Board:")?;
        write!(self.out, "{}", render_board(game.board()))?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", status_line(game))?;
        self.out.flush()
    }
}

impl BoardPrinter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> GameListener for BoardPrinter<W> {
    fn game_changed(&mut self, game: &Game) -> Option<Move> {
        if let Err(e) = self.print(game) {
            warn!(error = %e, "failed to print board");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Location, Player};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn loc(r: i32, c: i32) -> Location {
        Location::new(r, c).unwrap()
    }

    #[test]
    fn test_render_empty_board() {
        let text = render_board(&Board::EMPTY);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 2 * NUM_ROWS);
        assert_eq!(lines[0], "     0   1   2   3   4   5   6   7   8");
        assert_eq!(lines[1], "   +---+---+---+---+---+---+---+---+---+");
        assert_eq!(lines[2], " 0 |   |   |   |   |   |   |   |   |   |");
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_render_marks_and_winning_line() {
        let mut b = Board::EMPTY.update(Player::O, loc(1, 8)).unwrap();
        for c in 0..5 {
            b = b.update(Player::X, loc(0, c)).unwrap();
        }
        let text = render_board(&b);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], " 0 |*X*|*X*|*X*|*X*|*X*|   |   |   |   |");
        assert_eq!(lines[4], " 1 |   |   |   |   |   |   |   |   | O |");
    }

    #[test]
    fn test_status_lines() {
        let mut game = Game::new();
        assert_eq!(status_line(&game), "It is X's turn");
        game.submit_move(Player::X, loc(0, 0)).unwrap();
        assert_eq!(status_line(&game), "It is O's turn");

        let mut game = Game::with_first(Player::O);
        for c in 0..4 {
            game.submit_move(Player::O, loc(8, c)).unwrap();
            game.submit_move(Player::X, loc(7, c)).unwrap();
        }
        game.submit_move(Player::O, loc(8, 4)).unwrap();
        assert_eq!(status_line(&game), "O wins!");
    }

    #[test]
    fn test_printer_prints_on_every_change() {
        let buf = SharedBuf::default();
        let mut game = Game::new();
        game.add_listener(BoardPrinter::new(buf.clone())).unwrap();
        game.submit_move(Player::X, loc(4, 4)).unwrap();

        let text = buf.contents();
        assert_eq!(text.matches("Current Board:").count(), 2);
        assert!(text.contains("It is X's turn"));
        assert!(text.trim_end().ends_with("It is O's turn"));
        assert!(text.contains(" 4 |   |   |   |   | X |"));
    }
}
