//! Word scoring command
//!
//! Reports base letter scores and dictionary membership without playing a game.

use crate::core::{Dictionary, score_word};

/// Score and lookup result for one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport {
    pub word: String,
    /// `None` if the word contains non-letter characters
    pub score: Option<u32>,
    pub in_dictionary: bool,
}

/// Score each word and check it against the dictionary
#[must_use]
pub fn score_words<S: AsRef<str>>(words: &[S], dictionary: &Dictionary) -> Vec<WordReport> {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            WordReport {
                word: word.to_string(),
                score: score_word(word).ok(),
                in_dictionary: dictionary.is_valid(word),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_scores_and_membership() {
        let dict = Dictionary::from_words(["cabbage"]);
        let reports = score_words(&["cabbage", "zzzzzz", "c@bbage"], &dict);

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].score, Some(14));
        assert!(reports[0].in_dictionary);
        assert_eq!(reports[1].score, Some(60));
        assert!(!reports[1].in_dictionary);
        assert_eq!(reports[2].score, None);
        assert!(!reports[2].in_dictionary);
    }

    #[test]
    fn empty_input() {
        let words: &[&str] = &[];
        assert!(score_words(words, &Dictionary::empty()).is_empty());
    }
}
