//! Driver-side glue: one run, its clock and the leaderboard.

use std::path::PathBuf;

use fogmaze::generator::SeededRandom;
use fogmaze::leaderboard::Leaderboard;
use fogmaze::run::{Run, StepOutcome};
use fogmaze::time::{Clock, Duration, RunClock};
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::input::Key;
use crate::render;
use crate::settings::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Run won; the next input line is the player's name.
    AwaitingName { elapsed: Duration },
    Done,
}

#[derive(Debug)]
pub struct Session {
    run: Run,
    clock: RunClock,
    seed: u64,
    phase: Phase,
    leaderboard: Leaderboard,
    leaderboard_path: PathBuf,
}

impl Session {
    pub fn new(
        config: &AppConfig,
        leaderboard: Leaderboard,
        leaderboard_path: PathBuf,
    ) -> Result<Self, AppError> {
        let mut rng = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        let run = Run::new(config.maze, &mut rng)?;
        info!(
            "Run started: {}x{} maze, fog radius {}, seed {}",
            config.maze.width,
            config.maze.height,
            config.maze.fog_radius,
            rng.seed()
        );

        Ok(Self {
            run,
            clock: RunClock::start(),
            seed: rng.seed(),
            phase: Phase::Playing,
            leaderboard,
            leaderboard_path,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn run(&self) -> &Run {
        &self.run
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Route one key while playing. Returns `false` when the session should end.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let input = match key {
            Key::Quit => {
                info!("Run abandoned");
                self.phase = Phase::Done;
                return false;
            }
            Key::Move(input) => input,
        };
        if self.phase != Phase::Playing {
            return true;
        }

        let outcome = self.run.step(input, &self.clock);
        debug!(
            "step {:?} -> {} at {:?}",
            input.map(|d| d.as_str()),
            outcome.as_str(),
            self.run.agent()
        );
        if let StepOutcome::Completed { elapsed } = outcome {
            info!("Run complete in {}", fogmaze::time::format_elapsed(elapsed));
            self.phase = Phase::AwaitingName { elapsed };
        }
        true
    }

    /// Store the winning time under `name` and persist the board.
    pub fn submit_name(&mut self, name: &str) -> Option<usize> {
        let Phase::AwaitingName { elapsed } = self.phase else {
            return None;
        };
        self.phase = Phase::Done;

        let rank = self.leaderboard.record(name, elapsed);
        if let Err(e) = self.leaderboard.save(&self.leaderboard_path) {
            warn!("Could not save leaderboard: {}", e);
        } else {
            info!("Leaderboard saved ({:?})", self.leaderboard_path);
        }
        rank
    }

    /// Live time while playing; frozen at the winning time afterwards.
    pub fn elapsed(&self) -> Duration {
        self.run
            .finished_in()
            .unwrap_or_else(|| self.clock.elapsed())
    }

    pub fn frame(&self) -> String {
        let mut out = render::draw_maze(&self.run.view());
        out.push('\n');
        out.push_str(&render::draw_timer(self.elapsed()));
        out
    }
}
