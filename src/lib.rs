//! Scrabble Sprint
//!
//! A timed terminal word game: type a word of the requested length, score its
//! Scrabble letter values, and play ten rounds for the highest total.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scrabble_sprint::core::{Dictionary, adjust_score, score_word};
//!
//! let dictionary = Dictionary::load("words.txt").unwrap();
//! if dictionary.is_valid("cabbage") {
//!     let base = score_word("cabbage").unwrap();
//!     println!("Scored {}", adjust_score(base, 4.2, 15.0));
//! }
//! ```

// Core domain helpers
pub mod core;

// Game loop, timed input and errors
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
