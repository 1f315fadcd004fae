//! Formatting utilities for game text

use crate::game::RoundResult;
use std::io;

/// Per-round summary line
#[must_use]
pub fn round_summary_line(result: &RoundResult) -> String {
    format!(
        "Round {} Score: {}, Total Score: {}",
        result.round, result.adjusted_score, result.total_score
    )
}

/// Final line printed when a game ends
#[must_use]
pub fn game_over_line(total_score: u32) -> String {
    format!("Game Over! Your total score is {total_score}")
}

/// Warning shown when the dictionary can't be used
///
/// A missing file gets the plain message; other failures include the cause.
#[must_use]
pub fn dictionary_warning_line(error: &io::Error) -> String {
    if error.kind() == io::ErrorKind::NotFound {
        "Dictionary file not found.".to_string()
    } else {
        format!("Dictionary file could not be read: {error}")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((f64::from(value) / f64::from(max)) * width as f64) as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
