//! Terminal Sudoku game over a directory of puzzle files.
//!
//! # Usage
//!
//! Play puzzles from the default `puzzles` directory:
//!
//! ```sh
//! cargo run --bin gridoku
//! ```
//!
//! Play from another directory, with reproducible puzzle selection:
//!
//! ```sh
//! cargo run --bin gridoku -- path/to/puzzles --seed 42
//! ```
//!
//! List the puzzles a directory offers without playing:
//!
//! ```sh
//! cargo run --bin gridoku -- --list
//! ```
//!
//! The binary loads every puzzle under a directory, reports what it found,
//! draws one at random, and hands control to the interactive session loop.

use std::{io, path::PathBuf, process};

use clap::Parser;
use gridoku_pool::{DirectoryError, EmptyPoolError, Pool};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::session::Session;

mod session;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory tree holding the puzzle files.
    #[arg(value_name = "DIR", default_value = "puzzles")]
    puzzle_dir: PathBuf,

    /// Seed for puzzle selection; omit for a different game every run.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// List the loaded puzzles and exit.
    #[arg(long)]
    list: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("{_0}")]
    Directory(#[from] DirectoryError),
    #[display("{_0}")]
    EmptyPool(#[from] EmptyPoolError),
    #[display("{_0}")]
    Io(#[from] io::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("gridoku: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let pool = Pool::load(&args.puzzle_dir)?;

    if args.list {
        print!("{}", pool.list_sources());
        println!("{}", pool.summary());
        return Ok(());
    }

    let rng: Box<dyn Rng> = match args.seed {
        Some(seed) => {
            log::debug!("seeding puzzle selection with {seed}");
            Box::new(Pcg64Mcg::seed_from_u64(seed))
        }
        None => Box::new(rand::rng()),
    };

    let mut session = Session::new(pool, rng)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
