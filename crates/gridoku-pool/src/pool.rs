//! Puzzle collection loaded from a directory tree.

use std::{fs, io, path::Path};

use gridoku_core::Grid;
use rand::{Rng, RngExt as _};

use crate::error::{DirectoryError, EmptyPoolError};

/// Puzzles gathered from a directory tree.
///
/// Every regular file under the root is read and parsed. Files that do not
/// hold a well-formed puzzle are counted and skipped, so one stray file never
/// spoils the collection. The pool does not change after loading; play
/// sessions receive owned copies of its grids.
///
/// # Examples
///
/// ```no_run
/// use gridoku_pool::Pool;
///
/// let pool = Pool::load("puzzles")?;
/// println!("{}", pool.summary());
///
/// let mut rng = rand::rng();
/// let grid = pool.pick_random(&mut rng)?;
/// println!("{grid}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pool {
    grids: Vec<Grid>,
    rejected: usize,
}

impl Pool {
    /// Loads every puzzle file under `root`.
    ///
    /// The tree is walked depth-first with entries in path order, so the
    /// pool's contents are stable across runs. A file that cannot be read or
    /// parsed is logged at `warn` level, counted as rejected, and skipped; an
    /// unlistable subdirectory is logged and skipped as well. Entries that
    /// are neither regular files nor directories are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when `root` itself cannot be listed.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let root = root.as_ref();
        let mut pool = Self {
            grids: Vec::new(),
            rejected: 0,
        };
        pool.walk(root).map_err(|source| DirectoryError {
            path: root.to_owned(),
            source,
        })?;
        log::info!(
            "loaded {count} puzzles from {root} ({rejected} rejected)",
            count = pool.grids.len(),
            root = root.display(),
            rejected = pool.rejected,
        );
        Ok(pool)
    }

    /// Number of puzzles available to play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Whether no puzzle survived loading.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Number of files that failed to read or parse.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Number of files examined while loading.
    #[must_use]
    pub fn total_scanned(&self) -> usize {
        self.grids.len() + self.rejected
    }

    /// Draws a random puzzle, handing back an owned copy for a play session.
    ///
    /// Selection is uniform over the loaded puzzles and driven entirely by
    /// `rng`, so a seeded generator reproduces the same draws.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyPoolError`] when no puzzle survived loading.
    pub fn pick_random<R>(&self, rng: &mut R) -> Result<Grid, EmptyPoolError>
    where
        R: Rng + ?Sized,
    {
        if self.grids.is_empty() {
            return Err(EmptyPoolError);
        }
        let index = rng.random_range(0..self.grids.len());
        Ok(self.grids[index].clone())
    }

    /// Paths of the loaded puzzles, in pool order.
    pub fn sources(&self) -> impl Iterator<Item = &Path> {
        self.grids.iter().filter_map(Grid::source)
    }

    /// One-line account of the load: how many files play, how many do not.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{total} files scanned: {valid} playable, {rejected} rejected",
            total = self.total_scanned(),
            valid = self.grids.len(),
            rejected = self.rejected,
        )
    }

    /// Numbered listing of every loaded puzzle's path, one per line.
    #[must_use]
    pub fn list_sources(&self) -> String {
        self.sources()
            .enumerate()
            .map(|(index, path)| format!("{}. {}\n", index + 1, path.display()))
            .collect()
    }

    fn walk(&mut self, dir: &Path) -> io::Result<()> {
        let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
        entries.sort_by_key(fs::DirEntry::path);

        for entry in entries {
            let path = entry.path();
            match entry.file_type() {
                Ok(kind) if kind.is_dir() => {
                    if let Err(err) = self.walk(&path) {
                        log::warn!("skipping unreadable directory {}: {err}", path.display());
                    }
                }
                Ok(kind) if kind.is_file() => self.add_file(&path),
                Ok(_) => {}
                Err(err) => log::warn!("skipping unreadable entry {}: {err}", path.display()),
            }
        }
        Ok(())
    }

    fn add_file(&mut self, path: &Path) {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("rejecting {}: {err}", path.display());
                self.rejected += 1;
                return;
            }
        };
        match text.parse::<Grid>() {
            Ok(grid) => {
                log::debug!("loaded puzzle {}", path.display());
                self.grids.push(grid.with_source(path));
            }
            Err(err) => {
                log::warn!("rejecting {}: {err}", path.display());
                self.rejected += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn testdata(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("testdata")
            .join(name)
    }

    #[test]
    fn test_load_counts_valid_and_rejected_files() {
        let pool = Pool::load(testdata("mixed")).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.rejected(), 3);
        assert_eq!(pool.total_scanned(), 6);
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_walk_order_is_sorted_and_recursive() {
        let pool = Pool::load(testdata("mixed")).unwrap();
        let relative: Vec<_> = pool
            .sources()
            .map(|path| path.strip_prefix(testdata("mixed")).unwrap().to_owned())
            .collect();
        assert_eq!(
            relative,
            [
                PathBuf::from("classic.txt"),
                PathBuf::from("empty_board.txt"),
                PathBuf::from("more/diagonal.txt"),
            ]
        );
    }

    #[test]
    fn test_draws_are_pristine_owned_copies() {
        let pool = Pool::load(testdata("mixed")).unwrap();
        let expected: Vec<Grid> = pool
            .sources()
            .map(|path| {
                let text = fs::read_to_string(path).unwrap();
                text.parse::<Grid>().unwrap().with_source(path)
            })
            .collect();

        let mut rng = Pcg64Mcg::seed_from_u64(42);
        for _ in 0..30 {
            let mut grid = pool.pick_random(&mut rng).unwrap();
            assert!(expected.contains(&grid));
            // Scribble on the copy; it must never reach the pool.
            grid.set_guess(0, 2, 9);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_same_draws() {
        let pool = Pool::load(testdata("mixed")).unwrap();

        let draw_sources = |seed: u64| -> Vec<PathBuf> {
            let mut rng = Pcg64Mcg::seed_from_u64(seed);
            (0..20)
                .map(|_| {
                    let grid = pool.pick_random(&mut rng).unwrap();
                    grid.source().unwrap().to_owned()
                })
                .collect()
        };

        assert_eq!(draw_sources(7), draw_sources(7));
        assert_eq!(draw_sources(1234), draw_sources(1234));
    }

    #[test]
    fn test_draws_through_a_boxed_generator() {
        let pool = Pool::load(testdata("mixed")).unwrap();

        // A type-erased generator must draw exactly like the concrete one
        // behind it.
        let mut concrete = Pcg64Mcg::seed_from_u64(9);
        let mut boxed: Box<dyn Rng> = Box::new(Pcg64Mcg::seed_from_u64(9));
        for _ in 0..10 {
            let direct = pool.pick_random(&mut concrete).unwrap();
            let erased = pool.pick_random(boxed.as_mut()).unwrap();
            assert_eq!(direct.source(), erased.source());
        }
    }

    #[test]
    fn test_empty_pool_refuses_to_draw() {
        let pool = Pool::load(testdata("rejects")).unwrap();
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.rejected(), 2);

        let mut rng = Pcg64Mcg::seed_from_u64(0);
        assert_eq!(pool.pick_random(&mut rng), Err(EmptyPoolError));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = Pool::load(testdata("no_such_dir")).unwrap_err();
        assert_eq!(err.path, testdata("no_such_dir"));
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_file_root_is_an_error() {
        let err = Pool::load(testdata("mixed").join("classic.txt")).unwrap_err();
        assert_eq!(err.source.kind(), io::ErrorKind::NotADirectory);
    }

    #[test]
    fn test_reports_cover_all_loaded_puzzles() {
        let pool = Pool::load(testdata("mixed")).unwrap();

        assert_eq!(pool.summary(), "6 files scanned: 3 playable, 3 rejected");

        let listing = pool.list_sources();
        let lines: Vec<_> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1. "));
        assert!(lines[0].ends_with("classic.txt"));
        assert!(lines[1].starts_with("2. "));
        assert!(lines[1].ends_with("empty_board.txt"));
        assert!(lines[2].starts_with("3. "));
        assert!(lines[2].ends_with("diagonal.txt"));
    }
}
