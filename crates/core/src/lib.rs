//! # fogmaze
//!
//! Grid mazes explored under fog-of-war.
//!
//! This crate carves a random spanning-tree maze, moves a single agent through
//! it one cardinal step at a time, and reveals the maze in a square radius
//! around wherever the agent has been. A run ends when the agent steps onto the
//! exit.
//!
//! ## Quick Start
//!
//! ```
//! use fogmaze::prelude::*;
//!
//! let mut rng = SeededRandom::new(42);
//! let mut run = Run::new(MazeConfig::default(), &mut rng).unwrap();
//! let clock = RunClock::start();
//!
//! match run.step(Some(Direction::Right), &clock) {
//!     StepOutcome::Completed { elapsed } => println!("done in {}", format_elapsed(elapsed)),
//!     other => println!("{}", other.as_str()),
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): serialization derives and the JSON leaderboard store
//!
//! ## Modules
//!
//! - [`grid`]: cells, positions and the walled grid
//! - [`generator`]: randomized growing-tree carving and random sources
//! - [`movement`]: directions and wall-collision resolution
//! - [`visibility`]: fog-of-war bookkeeping
//! - [`run`]: the per-run state machine
//! - [`config`]: run parameters and their validation
//! - [`time`]: run clocks and elapsed-time formatting
//! - [`leaderboard`]: best completion times

#[path = "core/grid.rs"]
pub mod grid;

#[path = "core/generator.rs"]
pub mod generator;

#[path = "core/movement.rs"]
pub mod movement;

#[path = "core/visibility.rs"]
pub mod visibility;

#[path = "core/run.rs"]
pub mod run;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/time.rs"]
pub mod time;

#[cfg(feature = "serde")]
#[path = "core/leaderboard.rs"]
pub mod leaderboard;

/// Prelude module for convenient imports.
///
/// ```
/// use fogmaze::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigError, MazeConfig};
    pub use crate::generator::{generate, RandomSource, ScriptedRandom, SeededRandom};
    pub use crate::grid::{Cell, Grid, Pos};
    #[cfg(feature = "serde")]
    pub use crate::leaderboard::{Leaderboard, ScoreEntry, StoreError};
    pub use crate::movement::{resolve_move, Direction};
    pub use crate::run::{Run, RunState, RunView, StepOutcome};
    pub use crate::time::{format_elapsed, Clock, Duration, FixedClock, RunClock};
    pub use crate::visibility::Visibility;
}
