//! Game error taxonomy

use std::io;
use thiserror::Error;

/// Errors raised while playing a round
///
/// The first five variants reject a single submission and the round is retried.
/// `GameOver`, `InputClosed` and `Io` end the session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Word contains invalid characters.")]
    InvalidCharacters,

    #[error("Time limit exceeded. Please be faster next time!")]
    TimeExceeded { elapsed: f64 },

    #[error("Word must be exactly {expected} letters long.")]
    WrongLength { expected: usize, actual: usize },

    #[error("Invalid word. Try again.")]
    InvalidWord,

    #[error("You've already used that word. Try another one.")]
    DuplicateWord,

    #[error("The game is already over")]
    GameOver,

    #[error("Input closed before the game finished")]
    InputClosed,

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl GameError {
    /// Whether the round should simply be attempted again
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidCharacters
                | Self::TimeExceeded { .. }
                | Self::WrongLength { .. }
                | Self::InvalidWord
                | Self::DuplicateWord
        )
    }
}
