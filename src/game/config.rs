//! Game tunables

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Contestants per game
pub const PLAYER_COUNT: usize = 3;

/// Configuration for a single game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed behind [`GameConfig::rng`]; `None` seeds from the OS
    ///
    /// [`TurnScheduler`](super::TurnScheduler) never reads it. Callers build
    /// the scheduler's rng with [`GameConfig::rng`] so the puzzle draw and the
    /// wheel share one seeded stream.
    pub seed: Option<u64>,
    /// Full rotations of failed solve attempts before the game is called unsolved
    pub max_solve_rotations: usize,
    /// Actions allowed in the guessing round before the game is called stalled
    pub max_turns: usize,
    /// Delay after each computer turn when a person is watching
    pub pause: Duration,
}

impl GameConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            max_solve_rotations: 3,
            max_turns: 1000,
            pause: Duration::ZERO,
        }
    }

    /// Random source for this game
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
