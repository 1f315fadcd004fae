//! Scrabble letter values and word scoring
//!
//! The letter table is a fixed, process-wide constant. Scoring is case-insensitive.

use crate::game::GameError;

/// Point value of an uppercase ASCII letter
///
/// Returns 0 for anything outside `A..=Z`.
#[inline]
#[must_use]
pub const fn letter_value(letter: u8) -> u32 {
    match letter {
        b'A' | b'E' | b'I' | b'O' | b'U' | b'L' | b'N' | b'R' | b'S' | b'T' => 1,
        b'D' | b'G' => 2,
        b'B' | b'C' | b'M' | b'P' => 3,
        b'F' | b'H' | b'V' | b'W' | b'Y' => 4,
        b'K' => 5,
        b'J' | b'X' => 8,
        b'Q' | b'Z' => 10,
        _ => 0,
    }
}

/// Calculate the base Scrabble score of a word
///
/// # Errors
/// Returns `GameError::InvalidCharacters` if the word is empty or contains
/// anything other than alphabetic characters.
///
/// # Examples
/// ```
/// use scrabble_sprint::core::score_word;
///
/// assert_eq!(score_word("cabbage").unwrap(), 14);
/// assert_eq!(score_word("CABBAGE").unwrap(), 14);
/// assert!(score_word("c@bbage").is_err());
/// ```
pub fn score_word(word: &str) -> Result<u32, GameError> {
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return Err(GameError::InvalidCharacters);
    }

    // Non-ASCII letters pass the check above but have no table entry
    let score = word
        .to_uppercase()
        .bytes()
        .filter(u8::is_ascii_uppercase)
        .map(letter_value)
        .sum();

    Ok(score)
}
