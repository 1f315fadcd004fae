//! Interactive game command
//!
//! Runs one session on the process terminal.

use crate::core::Dictionary;
use crate::game::{GameConfig, GameError, GameSummary, Session, SystemClock};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

/// Build the length generator's random source
///
/// A seed gives a reproducible sequence of required lengths.
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    )
}

/// Play a full game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written.
pub fn run_play(
    dictionary: &Dictionary,
    config: GameConfig,
    seed: Option<u64>,
) -> Result<GameSummary, GameError> {
    let session = Session::new(dictionary, config, make_rng(seed), SystemClock::new());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = session.play(&mut stdin.lock(), &mut stdout.lock())?;

    tracing::info!(
        rounds = summary.rounds.len(),
        total = summary.total_score,
        finished = summary.finished,
        "game finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate_length;

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = make_rng(Some(99));
        let mut b = make_rng(Some(99));
        let first: Vec<usize> = (0..20).map(|_| generate_length(&mut a)).collect();
        let second: Vec<usize> = (0..20).map(|_| generate_length(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unseeded_rng_stays_in_range() {
        let mut rng = make_rng(None);
        assert!((3..=7).contains(&generate_length(&mut rng)));
    }
}
