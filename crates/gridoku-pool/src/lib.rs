//! Puzzle pool for gridoku: finding puzzle files and drawing one at random.
//!
//! The pool walks a directory tree, parses every file it finds with
//! [`gridoku_core`], keeps the well-formed puzzles, and counts the rest.
//! Drawing is driven by a caller-supplied random number generator, so games
//! can be reproducible when they want to be.
//!
//! # Overview
//!
//! - [`pool`]: the [`Pool`] collection with loading, random draws, and
//!   reporting
//! - [`error`]: the fatal failures, [`DirectoryError`] and [`EmptyPoolError`]
//!
//! # Examples
//!
//! ```no_run
//! use gridoku_pool::Pool;
//!
//! let pool = Pool::load("puzzles")?;
//! let mut rng = rand::rng();
//! let mut grid = pool.pick_random(&mut rng)?;
//! grid.set_guess(0, 0, 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod pool;

pub use self::{
    error::{DirectoryError, EmptyPoolError},
    pool::Pool,
};
