//! Core board representation and rule checks for gridoku.
//!
//! This crate holds the puzzle engine: parsing puzzle text into a board,
//! placing and clearing guesses, and answering the two questions the game
//! keeps asking, "is the board still legal" and "is it finished". It knows
//! nothing about files, terminals, or randomness; those live in the crates
//! built on top of it.
//!
//! # Overview
//!
//! - [`grid`]: the [`Grid`] board type with parsing, guessing, rule checks,
//!   and text rendering
//! - [`error`]: what can go wrong while parsing, [`ParseError`] and its
//!   [`SizeMismatch`] detail
//!
//! # Examples
//!
//! ```
//! use gridoku_core::Grid;
//!
//! let mut grid: Grid = "\
//! 53..7....
//! 6..195...
//! .98....6.
//! 8...6...3
//! 4..8.3..1
//! 7...2...6
//! .6....28.
//! ...419..5
//! ....8..79"
//!     .parse()
//!     .unwrap();
//!
//! // Digit 4 may go in the top row's third cell.
//! let allowed = grid.allowed_values(0, 2);
//! assert!(allowed[3]);
//!
//! grid.set_guess(0, 2, 4);
//! assert!(grid.is_valid());
//! ```

pub mod error;
pub mod grid;

pub use self::{
    error::{ParseError, SizeMismatch},
    grid::Grid,
};
