//! Session configuration

use crate::core::DEFAULT_TIME_LIMIT_SECS;

/// Number of completed rounds in a standard game
pub const DEFAULT_ROUNDS: u32 = 10;

/// Upper bound accepted for `--rounds`
pub const MAX_ROUNDS: u32 = 1000;

/// Immutable settings for one game session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Completed rounds needed to finish the game
    pub rounds: u32,
    /// Seconds allowed per answer
    pub time_limit_secs: f64,
}

impl GameConfig {
    #[must_use]
    pub const fn new(rounds: u32, time_limit_secs: f64) -> Self {
        Self {
            rounds,
            time_limit_secs,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS, DEFAULT_TIME_LIMIT_SECS)
    }
}
