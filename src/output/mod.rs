//! Terminal output formatting
//!
//! Exact game text and colored display for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_dictionary_warning, print_game_summary, print_score_report,
};
