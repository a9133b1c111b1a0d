//! Reading moves and menu choices from a terminal

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::warn;

use crate::board::{Board, Location, Player};
use crate::controller::{MoveSource, PlayerKind};
use crate::error::GameError;

/// Where console input lines come from.
///
/// Both players read through the same source, so implementations must not
/// buffer past the end of the line they return.
pub trait LineSource: Send {
    /// Next line without its terminator; None at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

fn read_from<B: BufRead>(reader: &mut B) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    Ok(Some(buf))
}

impl LineSource for io::Stdin {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_from(&mut self.lock())
    }
}

impl<T: AsRef<[u8]> + Send> LineSource for io::Cursor<T> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_from(self)
    }
}

/// Why a typed move was not understood
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected a row and a column, got {0:?}")]
    Malformed(String),

    #[error(transparent)]
    Location(#[from] GameError),
}

/// Parse `"row col"` into a location.
pub fn parse_location(input: &str) -> Result<Location, InputError> {
    let mut parts = input.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::Malformed(input.to_string()));
    };
    let row: i32 = row
        .parse()
        .map_err(|_| InputError::Malformed(input.to_string()))?;
    let col: i32 = col
        .parse()
        .map_err(|_| InputError::Malformed(input.to_string()))?;
    Ok(Location::new(row, col)?)
}

#[inline]
fn is_quit(input: &str) -> bool {
    matches!(input, "exit" | "quit")
}

/// Move source that prompts on `out` and reads `row col` lines from `input`.
///
/// `exit`, `quit` or end of input end the player's participation.
pub struct ConsoleInput<R, W> {
    input: R,
    out: W,
}

impl<R: LineSource, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }

    fn prompt(&mut self, me: Player) -> io::Result<Option<Location>> {
        loop {
            write!(self.out, "enter row and column for {me}: ")?;
            self.out.flush()?;

            let Some(line) = self.input.read_line()? else {
                return Ok(None);
            };
            let line = line.trim();
            if is_quit(line) {
                return Ok(None);
            }
            match parse_location(line) {
                Ok(loc) => return Ok(Some(loc)),
                Err(e) => writeln!(self.out, "error: {e}")?,
            }
        }
    }
}

impl ConsoleInput<io::Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R, W> MoveSource for ConsoleInput<R, W>
where
    R: LineSource,
    W: Write + Send,
{
    fn request_move(&mut self, _board: &Board, me: Player) -> Option<Location> {
        match self.prompt(me) {
            Ok(loc) => loc,
            Err(e) => {
                warn!(error = %e, "console input failed");
                None
            }
        }
    }

    fn rejected(&mut self, _loc: Location, err: &GameError) {
        if let Err(e) = writeln!(self.out, "error: {err}") {
            warn!(error = %e, "console output failed");
        }
    }
}

/// The controller menu, e.g. `1) by a human   2) by the dumb AI ...`
pub fn menu_line() -> String {
    PlayerKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| format!("{}) by {}", i + 1, kind.label()))
        .collect::<Vec<_>>()
        .join("   ")
}

/// Ask who plays `player` until a valid choice is entered.
///
/// Returns None if the input ends first.
pub fn choose_kind<R, W>(player: Player, input: &mut R, out: &mut W) -> io::Result<Option<PlayerKind>>
where
    R: LineSource,
    W: Write,
{
    loop {
        writeln!(out, "How should {player} be played?")?;
        writeln!(out, "{}", menu_line())?;
        out.flush()?;

        let Some(line) = input.read_line()? else {
            return Ok(None);
        };
        let choice = line.trim().parse::<usize>().ok();
        match choice.and_then(PlayerKind::from_choice) {
            Some(kind) => return Ok(Some(kind)),
            None => writeln!(out, "please enter 1, 2, 3 or 4")?,
        }
    }
}
