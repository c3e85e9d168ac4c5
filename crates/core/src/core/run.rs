//! One run: maze, agent, fog and the `Active -> Won` state machine.
//!
//! Each recognised input goes through the same strictly ordered pipeline:
//! resolve the move, reveal around the (possibly unchanged) agent, then test
//! for the exit. Revealing before the win check guarantees the exit cell is
//! already seen when the run completes.

use crate::config::{ConfigError, MazeConfig};
use crate::generator::{generate, RandomSource};
use crate::grid::{Grid, Pos};
use crate::movement::{resolve_move, Direction};
use crate::time::{Clock, Duration};
use crate::visibility::Visibility;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunState {
    Active,
    Won,
}

/// Result of feeding one input event to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No direction, or the run is already won.
    Ignored,
    /// Target cell was a wall; nothing changed.
    Bump,
    Moved,
    /// The agent reached the exit. Emitted exactly once per run.
    Completed { elapsed: Duration },
}

impl StepOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            StepOutcome::Ignored => "ignored",
            StepOutcome::Bump => "bump",
            StepOutcome::Moved => "moved",
            StepOutcome::Completed { .. } => "completed",
        }
    }

    pub fn completion(self) -> Option<Duration> {
        match self {
            StepOutcome::Completed { elapsed } => Some(elapsed),
            _ => None,
        }
    }
}

/// Read-only borrow handed to renderers once per frame.
#[derive(Debug, Clone, Copy)]
pub struct RunView<'a> {
    pub agent: Pos,
    pub grid: &'a Grid,
    pub visibility: &'a Visibility,
    pub state: RunState,
}

#[derive(Debug, Clone)]
pub struct Run {
    config: MazeConfig,
    grid: Grid,
    agent: Pos,
    visibility: Visibility,
    state: RunState,
    finished_in: Option<Duration>,
}

impl Run {
    /// Validate `config` and carve a fresh maze from `rng`.
    pub fn new<R: RandomSource + ?Sized>(
        config: MazeConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = generate(config.width, config.height, rng);
        Ok(Self::start(config, grid))
    }

    /// Run on a prepared grid. Its dimensions override `config`'s.
    ///
    /// The grid must keep a closed border, an open entry and an exit
    /// reachable from it.
    pub fn with_grid(mut config: MazeConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.width = grid.width();
        config.height = grid.height();
        config.validate()?;

        for y in 0..grid.total_height() {
            for x in 0..grid.total_width() {
                let p = Pos::new(x, y);
                if grid.is_border(p) && grid.is_open(p) {
                    return Err(ConfigError::OpenBorder { x, y });
                }
            }
        }
        if !grid.is_open(grid.entry()) {
            return Err(ConfigError::BlockedEntry);
        }
        if !grid.is_open(grid.exit()) {
            return Err(ConfigError::BlockedExit);
        }
        if !grid.reachable_from(grid.entry()).contains(&grid.exit()) {
            return Err(ConfigError::ExitUnreachable {
                width: config.width,
                height: config.height,
            });
        }
        Ok(Self::start(config, grid))
    }

    /// Discard the current maze and begin again at the entry.
    pub fn restart<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let grid = generate(self.config.width, self.config.height, rng);
        *self = Self::start(self.config, grid);
    }

    fn start(config: MazeConfig, grid: Grid) -> Self {
        let agent = grid.entry();
        let mut visibility = Visibility::for_grid(&grid);
        visibility.reveal(agent, config.fog_radius);

        Self {
            config,
            grid,
            agent,
            visibility,
            state: RunState::Active,
            finished_in: None,
        }
    }

    /// Feed one input event. `None` is an unrecognised key.
    ///
    /// `clock` is read only when the move completes the run.
    pub fn step<C: Clock + ?Sized>(&mut self, input: Option<Direction>, clock: &C) -> StepOutcome {
        if self.state == RunState::Won {
            return StepOutcome::Ignored;
        }
        let Some(direction) = input else {
            return StepOutcome::Ignored;
        };

        let next = resolve_move(self.agent, direction, &self.grid);
        let moved = next != self.agent;
        self.agent = next;
        self.visibility.reveal(self.agent, self.config.fog_radius);

        if !moved {
            return StepOutcome::Bump;
        }

        if self.agent == self.grid.exit() {
            let elapsed = clock.elapsed();
            self.state = RunState::Won;
            self.finished_in = Some(elapsed);
            return StepOutcome::Completed { elapsed };
        }
        StepOutcome::Moved
    }

    pub fn view(&self) -> RunView<'_> {
        RunView {
            agent: self.agent,
            grid: &self.grid,
            visibility: &self.visibility,
            state: self.state,
        }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> Pos {
        self.agent
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == RunState::Won
    }

    /// Elapsed time recorded by the winning move.
    pub fn finished_in(&self) -> Option<Duration> {
        self.finished_in
    }
}
