//! Interactive play loop over a drawn puzzle.

use std::io::{self, BufRead, Write};

use gridoku_core::Grid;
use gridoku_pool::{EmptyPoolError, Pool};
use rand::Rng;

/// A running game: the pool, the selection RNG, and the board in play.
///
/// The session owns its board outright; drawing a puzzle copies it out of the
/// pool, so abandoned games never leak guesses into later ones.
pub(crate) struct Session {
    pool: Pool,
    rng: Box<dyn Rng>,
    grid: Grid,
}

impl Session {
    /// Draws the opening puzzle and readies the game.
    pub(crate) fn new(pool: Pool, mut rng: Box<dyn Rng>) -> Result<Self, EmptyPoolError> {
        let grid = pool.pick_random(rng.as_mut())?;
        Ok(Self { pool, rng, grid })
    }

    /// Runs the command loop until the player quits or input runs out.
    pub(crate) fn run<R, W>(&mut self, input: R, output: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "Welcome to gridoku. Puzzles on offer:")?;
        write!(output, "{}", self.pool.list_sources())?;
        writeln!(output, "{}", self.pool.summary())?;
        writeln!(output)?;
        writeln!(output, "The puzzle is:")?;
        write!(output, "{}", self.grid)?;
        self.report(output)?;

        let mut lines = input.lines();
        loop {
            writeln!(output, "What would you like to do?")?;
            writeln!(
                output,
                "set (s ROW COL VALUE), allowed values (g ROW COL), clear (c), new puzzle (n), quit (q)"
            )?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            match Command::parse(&line) {
                Some(command) => {
                    if !self.apply(command, output)? {
                        break;
                    }
                }
                None => writeln!(output, "Sorry, that is not a command I know.")?,
            }

            writeln!(output, "The puzzle is now:")?;
            write!(output, "{}", self.grid)?;
            self.report(output)?;
        }
        writeln!(output, "Thanks for playing.")?;
        Ok(())
    }

    /// Carries out one command; `Ok(false)` ends the session.
    fn apply<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<bool> {
        match command {
            Command::Quit => return Ok(false),
            Command::Set { row, col, value } => {
                if let (Some(row), Some(col)) = (row.checked_sub(1), col.checked_sub(1)) {
                    self.grid.set_guess(row, col, value);
                }
            }
            Command::Allowed { row, col } => self.print_allowed(row, col, output)?,
            Command::Clear => self.grid.reset(),
            Command::Next => {
                self.grid = self
                    .pool
                    .pick_random(self.rng.as_mut())
                    .expect("session pool is never empty");
                writeln!(output, "Here is a fresh puzzle.")?;
            }
        }
        Ok(true)
    }

    /// Lists the digits the given 1-based cell accepts.
    fn print_allowed<W: Write>(&self, row: usize, col: usize, output: &mut W) -> io::Result<()> {
        let size = self.grid.size();
        let cell = (row.checked_sub(1), col.checked_sub(1));
        let (Some(row), Some(col)) = cell else {
            return writeln!(output, "Rows and columns run from 1 to {size}.");
        };
        if row >= size || col >= size {
            return writeln!(output, "Rows and columns run from 1 to {size}.");
        }

        let digits: Vec<String> = self
            .grid
            .allowed_values(row, col)
            .iter()
            .enumerate()
            .filter_map(|(index, &allowed)| allowed.then(|| (index + 1).to_string()))
            .collect();
        if digits.is_empty() {
            writeln!(output, "No value can go there right now.")
        } else {
            writeln!(output, "Allowed values are: {}", digits.join(" "))
        }
    }

    /// Mirrors the board state back to the player after each command.
    fn report<W: Write>(&self, output: &mut W) -> io::Result<()> {
        if !self.grid.is_valid() {
            writeln!(output, "You have made an error in the puzzle.")?;
        } else if self.grid.is_complete() {
            writeln!(output, "Congratulations, you have completed the puzzle.")?;
        }
        Ok(())
    }
}

/// One line of player input. Coordinates are 1-based at this surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Set { row: usize, col: usize, value: u8 },
    Allowed { row: usize, col: usize },
    Clear,
    Next,
    Quit,
}

impl Command {
    /// Reads a command from one input line, `None` when it does not parse.
    ///
    /// Keywords are case-insensitive and arguments are whitespace-separated,
    /// so `"S 1 3 4"` and `"s  1 3 4"` both place a guess.
    fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let keyword = words.next()?.to_ascii_lowercase();
        let command = match keyword.as_str() {
            "s" => Self::Set {
                row: words.next()?.parse().ok()?,
                col: words.next()?.parse().ok()?,
                value: words.next()?.parse().ok()?,
            },
            "g" => Self::Allowed {
                row: words.next()?.parse().ok()?,
                col: words.next()?.parse().ok()?,
            },
            "c" => Self::Clear,
            "n" => Self::Next,
            "q" => Self::Quit,
            _ => return None,
        };
        words.next().is_none().then_some(command)
    }
}
