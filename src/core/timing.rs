//! Round timing: required word length and time-based score adjustment

use rand::Rng;
use std::ops::RangeInclusive;

/// Inclusive range of word lengths a round can ask for
pub const WORD_LENGTHS: RangeInclusive<usize> = 3..=7;

/// Default time allowed per answer, in seconds
pub const DEFAULT_TIME_LIMIT_SECS: f64 = 15.0;

/// Elapsed times below this are raised to it before computing the bonus
pub const MIN_ELAPSED_SECS: f64 = 1.0;

/// Sample a required word length uniformly from [`WORD_LENGTHS`]
pub fn generate_length<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.random_range(WORD_LENGTHS)
}

/// Bonus factor for an answer given after `elapsed_secs`
///
/// `max(1, (limit - elapsed) / limit)` with `elapsed` clamped to at least
/// [`MIN_ELAPSED_SECS`]. The factor has no upper clamp.
#[must_use]
pub fn time_bonus(elapsed_secs: f64, limit_secs: f64) -> f64 {
    let elapsed = elapsed_secs.max(MIN_ELAPSED_SECS);
    ((limit_secs - elapsed) / limit_secs).max(1.0)
}

/// Scale a base score by the time bonus, flooring to an integer
///
/// # Examples
/// ```
/// use scrabble_sprint::core::adjust_score;
///
/// assert_eq!(adjust_score(14, 1.0, 15.0), 14);
/// assert!(adjust_score(14, 15.0, 15.0) <= 14);
/// ```
#[must_use]
pub fn adjust_score(base: u32, elapsed_secs: f64, limit_secs: f64) -> u32 {
    (f64::from(base) * time_bonus(elapsed_secs, limit_secs)).floor() as u32
}
