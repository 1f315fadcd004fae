//! Game loop and its supporting types
//!
//! Timed input, session state and the error taxonomy shared by every round.

mod config;
mod error;
pub mod input;
mod session;

pub use config::{DEFAULT_ROUNDS, GameConfig, MAX_ROUNDS};
pub use error::GameError;
pub use input::{Clock, SystemClock, TimedWord, read_timed_word};
pub use session::{GameSummary, RoundResult, Session};
