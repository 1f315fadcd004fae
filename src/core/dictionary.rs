//! Word dictionary
//!
//! An immutable set of uppercase words, loaded once at startup and queried for membership.

use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Set of valid words, stored uppercase
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Load a dictionary with one word per line
    ///
    /// Lines are trimmed and uppercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let dictionary = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into dictionary", dictionary.len());
        Ok(dictionary)
    }

    /// Build a dictionary from an iterator of words
    ///
    /// # Examples
    /// ```
    /// use scrabble_sprint::core::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["apple", "Cabbage"]);
    /// assert!(dict.is_valid("APPLE"));
    /// assert!(dict.is_valid("cabbage"));
    /// assert!(!dict.is_valid("zzzzzz"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Create an empty dictionary that rejects every word
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether the uppercase form of `word` is in the dictionary
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Number of words loaded
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
