//! Command implementations

pub mod play;
pub mod score;

pub use play::{make_rng, run_play};
pub use score::{WordReport, score_words};
