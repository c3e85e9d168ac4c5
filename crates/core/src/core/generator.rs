//! Randomized growing-tree maze carving on the two-step lattice.
//!
//! Rooms sit on odd coordinates; each expansion opens the wall cell between a
//! frontier room and an unvisited room two steps away. Every carved edge joins
//! a new room to the tree, so the open rooms form a spanning tree rooted at the
//! entry. The exit is force-opened afterwards; when the interior width is even
//! that adds one leaf cell next to the last lattice room.

use crate::grid::{Grid, Pos};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lattice neighbours in the order they are examined: right, left, down, up.
const LATTICE_STEPS: [(i32, i32); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Uniform selection over a dynamically sized candidate list.
pub trait RandomSource {
    /// Index in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Seedable ChaCha8 stream. Same seed, same maze.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Fresh seed from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of picks, cycling when exhausted.
///
/// Useful for reproducing a specific layout; `ScriptedRandom::new(vec![0])`
/// always expands the oldest frontier room.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let v = self.picks[self.cursor % self.picks.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v % len
    }
}

/// Carve a maze with a `width` × `height` interior.
///
/// Total for any dimensions: the frontier strictly shrinks once every room
/// has been opened, and the entry and exit are left open. A zero dimension
/// has no interior and yields an all-wall grid.
pub fn generate<R: RandomSource + ?Sized>(width: u32, height: u32, rng: &mut R) -> Grid {
    let mut grid = Grid::walled(width, height);
    if width == 0 || height == 0 {
        return grid;
    }
    let entry = grid.entry();
    grid.open(entry);

    let mut frontier: Vec<Pos> = vec![entry];
    while !frontier.is_empty() {
        // Custom sources may hand back anything; keep the index in range.
        let i = rng.pick(frontier.len()) % frontier.len();
        let room = frontier.remove(i);

        for (dx, dy) in LATTICE_STEPS {
            let Some(next) = room.offset(dx, dy) else {
                continue;
            };
            if next.x == 0 || next.y == 0 || next.x > width || next.y > height {
                continue;
            }
            if grid.is_open(next) {
                continue;
            }

            if let Some(between) = room.offset(dx / 2, dy / 2) {
                grid.open(between);
            }
            grid.open(next);
            frontier.push(next);
        }
    }

    let exit = grid.exit();
    grid.open(exit);
    grid
}
