//! Core domain helpers for the word game
//!
//! Pure computations with no terminal I/O: letter scoring, dictionary lookup,
//! required-length sampling and time-based score adjustment.

mod dictionary;
mod letters;
mod timing;

pub use dictionary::Dictionary;
pub use letters::{letter_value, score_word};
pub use timing::{
    DEFAULT_TIME_LIMIT_SECS, MIN_ELAPSED_SECS, WORD_LENGTHS, adjust_score, generate_length,
    time_bonus,
};
