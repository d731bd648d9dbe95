//! Puzzle grid representation and rule checks.

use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::{ParseError, SizeMismatch};

/// Edge length of one subgrid.
const BLOCK: usize = 3;

/// A square number-place board of fixed givens and player guesses.
///
/// Cells hold `0` (empty) or a digit `1..=size`. Cells read from a puzzle
/// source are fixed and survive [`reset`]; every other cell is open for
/// guessing. The canonical board is 9x9, produced by [`parse`] or the
/// [`FromStr`] impl; [`empty`] also builds larger boards whose dimension is
/// a multiple of 3.
///
/// [`reset`]: Grid::reset
/// [`parse`]: Grid::parse
/// [`empty`]: Grid::empty
///
/// # Examples
///
/// ```
/// use gridoku_core::Grid;
///
/// let mut grid: Grid = "\
/// 53..7....
/// 6..195...
/// .98....6.
/// 8...6...3
/// 4..8.3..1
/// 7...2...6
/// .6....28.
/// ...419..5
/// ....8..79"
///     .parse()
///     .unwrap();
///
/// assert!(grid.is_valid());
/// assert!(!grid.is_complete());
///
/// grid.set_guess(0, 2, 4);
/// assert_eq!(grid.value(0, 2), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Cell values in row-major order, `0` for empty.
    values: Vec<u8>,
    /// Which cells came from the puzzle source.
    fixed: Vec<bool>,
    size: usize,
    source: Option<PathBuf>,
}

impl Grid {
    /// Board dimension used by [`parse`](Grid::parse).
    pub const DEFAULT_SIZE: usize = 9;

    /// Creates an all-empty board of the given dimension.
    ///
    /// Every cell starts at `0` and no cell is fixed.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero, not a multiple of 3, or greater than 255.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::Grid;
    ///
    /// let grid = Grid::empty(Grid::DEFAULT_SIZE);
    /// assert!(grid.is_valid());
    /// assert!(!grid.is_complete());
    /// assert_eq!(grid.value(0, 0), 0);
    /// ```
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(
            size != 0 && size % BLOCK == 0,
            "board size must be a nonzero multiple of {BLOCK}, got {size}"
        );
        assert!(
            size <= usize::from(u8::MAX),
            "board size must be at most {max}, got {size}",
            max = u8::MAX
        );
        Self {
            values: vec![0; size * size],
            fixed: vec![false; size * size],
            size,
            source: None,
        }
    }

    /// Parses puzzle text, one line per board row.
    ///
    /// The input must be exactly 9 lines of exactly 9 characters. `.` leaves
    /// a cell empty; `1`-`9` fills it and marks it fixed. Nothing else is
    /// accepted, `0` included. Parsing is all-or-nothing: on failure no grid
    /// is produced.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Size`] for a wrong line count or line width and
    /// [`ParseError::Character`] for an invalid cell character. Within a line
    /// the width is checked before any cell is read, and lines past the ninth
    /// fail the parse without having their contents examined.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Grid, ParseError};
    ///
    /// let grid = Grid::parse([
    ///     "..3......",
    ///     ".........",
    ///     ".........",
    ///     ".........",
    ///     ".........",
    ///     ".........",
    ///     ".........",
    ///     ".........",
    ///     ".........",
    /// ])
    /// .unwrap();
    /// assert_eq!(grid.value(0, 2), 3);
    /// assert!(grid.is_fixed(0, 2));
    ///
    /// let err = Grid::parse(["123"]).unwrap_err();
    /// assert!(matches!(err, ParseError::Size(_)));
    /// ```
    pub fn parse<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expected = Self::DEFAULT_SIZE;
        let mut grid = Self::empty(expected);
        let mut lines = lines.into_iter();

        for row in 0..expected {
            let Some(line) = lines.next() else {
                return Err(SizeMismatch::Lines {
                    expected,
                    found: row,
                }
                .into());
            };
            let line = line.as_ref();
            let found = line.chars().count();
            if found != expected {
                return Err(SizeMismatch::Width {
                    row,
                    expected,
                    found,
                }
                .into());
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    '1'..='9' => {
                        let index = row * expected + col;
                        grid.values[index] = digit_value(ch);
                        grid.fixed[index] = true;
                    }
                    _ => return Err(ParseError::Character { row, col, ch }),
                }
            }
        }

        let extra = lines.count();
        if extra != 0 {
            return Err(SizeMismatch::Lines {
                expected,
                found: expected + extra,
            }
            .into());
        }
        Ok(grid)
    }

    /// Board dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value in the given cell, `0` when empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..size`.
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> u8 {
        self.values[self.index(row, col)]
    }

    /// Whether the given cell came from the puzzle source.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..size`.
    #[must_use]
    pub fn is_fixed(&self, row: usize, col: usize) -> bool {
        self.fixed[self.index(row, col)]
    }

    /// Places a guess in the given cell.
    ///
    /// The guess is ignored when the coordinates are off the board, the value
    /// is outside `1..=size`, or the cell is fixed. A refused guess leaves
    /// the board untouched. Guessed cells can be overwritten by later guesses
    /// and cleared by [`reset`](Grid::reset).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::Grid;
    ///
    /// let mut grid = Grid::empty(Grid::DEFAULT_SIZE);
    /// grid.set_guess(4, 4, 7);
    /// assert_eq!(grid.value(4, 4), 7);
    ///
    /// // Out of range, ignored.
    /// grid.set_guess(4, 4, 10);
    /// assert_eq!(grid.value(4, 4), 7);
    /// ```
    pub fn set_guess(&mut self, row: usize, col: usize, value: u8) {
        if row >= self.size || col >= self.size {
            return;
        }
        if value == 0 || value > self.digit_limit() {
            return;
        }
        let index = row * self.size + col;
        if !self.fixed[index] {
            self.values[index] = value;
        }
    }

    /// Whether no digit repeats in any row, column, or subgrid.
    ///
    /// Empty cells never conflict, so a freshly parsed or reset puzzle is
    /// valid. Completeness is a separate question, answered by
    /// [`is_complete`](Grid::is_complete).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::Grid;
    ///
    /// let mut grid = Grid::empty(Grid::DEFAULT_SIZE);
    /// assert!(grid.is_valid());
    ///
    /// grid.set_guess(0, 0, 9);
    /// grid.set_guess(1, 1, 9); // same subgrid
    /// assert!(!grid.is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rows_valid() && self.columns_valid() && self.subgrids_valid()
    }

    /// Whether every cell holds a digit.
    ///
    /// Says nothing about validity; a full board can still break the rules.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|value| *value != 0)
    }

    /// Which digits could go in the given cell right now.
    ///
    /// Entry `i` answers for digit `i + 1`. Each candidate is judged by
    /// placing it in the cell and checking the whole board, so on a board
    /// that is already invalid somewhere else every candidate is refused no
    /// matter what the cell holds. The probe disregards the cell's current
    /// value and its fixed flag; the board itself is never modified.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::Grid;
    ///
    /// let mut grid = Grid::empty(Grid::DEFAULT_SIZE);
    /// grid.set_guess(0, 0, 1);
    ///
    /// let allowed = grid.allowed_values(0, 8);
    /// assert!(!allowed[0]); // 1 repeats in the row
    /// assert!(allowed[1]); // 2 is fine
    /// ```
    #[must_use]
    pub fn allowed_values(&self, row: usize, col: usize) -> Vec<bool> {
        let index = self.index(row, col);
        let mut probe = self.clone();
        (1..=self.digit_limit())
            .map(|candidate| {
                probe.values[index] = candidate;
                probe.is_valid()
            })
            .collect()
    }

    /// Clears every guess, leaving the fixed cells alone.
    pub fn reset(&mut self) {
        for (value, &fixed) in self.values.iter_mut().zip(&self.fixed) {
            if !fixed {
                *value = 0;
            }
        }
    }

    /// Tags the grid with the path it was read from.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Path the grid was read from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.size, "row out of range: {row}");
        assert!(col < self.size, "column out of range: {col}");
        row * self.size + col
    }

    /// Largest digit a cell can hold, equal to the board dimension.
    #[expect(clippy::cast_possible_truncation)]
    fn digit_limit(&self) -> u8 {
        self.size as u8
    }

    fn rows_valid(&self) -> bool {
        (0..self.size).all(|row| self.group_valid((0..self.size).map(|col| self.value(row, col))))
    }

    fn columns_valid(&self) -> bool {
        (0..self.size).all(|col| self.group_valid((0..self.size).map(|row| self.value(row, col))))
    }

    fn subgrids_valid(&self) -> bool {
        let anchors = || (0..self.size).step_by(BLOCK);
        anchors().all(|top| {
            anchors().all(|left| {
                self.group_valid(
                    (top..top + BLOCK)
                        .flat_map(|row| (left..left + BLOCK).map(move |col| self.value(row, col))),
                )
            })
        })
    }

    /// Whether each digit occurs at most once among `cells`.
    fn group_valid(&self, cells: impl Iterator<Item = u8>) -> bool {
        let mut seen = vec![false; self.size + 1];
        for value in cells {
            if value != 0 {
                let slot = &mut seen[usize::from(value)];
                if *slot {
                    return false;
                }
                *slot = true;
            }
        }
        true
    }

    /// Whether a vertical or horizontal rule follows this column or row.
    fn block_boundary(&self, line: usize) -> bool {
        line % BLOCK == BLOCK - 1 && line + 1 != self.size
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    /// Parses puzzle text split on line breaks; see [`Grid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size;

        write!(f, "    ")?;
        for col in 0..size {
            write!(f, "{}", col + 1)?;
            if col + 1 != size {
                write!(f, "  ")?;
            }
            if self.block_boundary(col) {
                write!(f, "| ")?;
            }
        }
        writeln!(f)?;

        // 34 dashes on the canonical board
        let rule = "-".repeat(3 * size + 2 * (size / BLOCK) + 1);
        writeln!(f, "{rule}")?;

        for row in 0..size {
            write!(f, "{} | ", row + 1)?;
            for col in 0..size {
                match self.value(row, col) {
                    0 => write!(f, ".  ")?,
                    digit => write!(f, "{digit}  ")?,
                }
                if self.block_boundary(col) {
                    write!(f, "| ")?;
                }
            }
            writeln!(f)?;
            if self.block_boundary(row) {
                writeln!(f, "{rule}")?;
            }
        }
        Ok(())
    }
}

/// Numeric value of a digit character.
///
/// Callers must pass `'1'..='9'`.
#[expect(clippy::cast_possible_truncation)]
fn digit_value(ch: char) -> u8 {
    match ch.to_digit(10) {
        Some(digit) => digit as u8,
        None => unreachable!("not a digit character: {ch:?}"),
    }
}
