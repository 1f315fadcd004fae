//! Game session state machine
//!
//! Each attempt runs: generate a required length, read a timed answer,
//! reject duplicates and unknown words, then score and count the round.
//! Any rejection retries the round with a fresh length; nothing is scored
//! or counted for a rejected attempt.

use super::input::{Clock, TimedWord, read_timed_word};
use super::{GameConfig, GameError};
use crate::core::{Dictionary, adjust_score, generate_length, score_word};
use crate::output::formatters::{game_over_line, round_summary_line};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::io::{BufRead, Write};

/// A completed, scored round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// 1-based round number
    pub round: u32,
    pub word: String,
    pub base_score: u32,
    pub adjusted_score: u32,
    pub elapsed_secs: f64,
    /// Running total after this round
    pub total_score: u32,
}

/// Outcome of a whole session
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub rounds: Vec<RoundResult>,
    pub total_score: u32,
    /// False if input ended before all rounds were played
    pub finished: bool,
}

/// One game: used words, round count and total score
pub struct Session<'d, R, C> {
    dictionary: &'d Dictionary,
    config: GameConfig,
    rng: R,
    clock: C,
    used_words: FxHashSet<String>,
    rounds: Vec<RoundResult>,
    total_score: u32,
}

impl<'d, R: Rng, C: Clock> Session<'d, R, C> {
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, config: GameConfig, rng: R, clock: C) -> Self {
        Self {
            dictionary,
            config,
            rng,
            clock,
            used_words: FxHashSet::default(),
            rounds: Vec::new(),
            total_score: 0,
        }
    }

    /// Rounds completed so far
    #[must_use]
    pub fn round_count(&self) -> u32 {
        self.rounds.len() as u32
    }

    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.round_count() >= self.config.rounds
    }

    /// Whether `word` was already scored this session (case-insensitive)
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.contains(&word.to_uppercase())
    }

    /// Validate and score an answer that already passed the timing and length checks
    ///
    /// # Errors
    ///
    /// Returns `GameOver` once every round is complete, otherwise
    /// `DuplicateWord`, `InvalidWord` or `InvalidCharacters`; the session is
    /// left unchanged in every error case.
    pub fn submit(&mut self, answer: TimedWord) -> Result<RoundResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let key = answer.word.to_uppercase();

        if self.used_words.contains(&key) {
            return Err(GameError::DuplicateWord);
        }

        if !self.dictionary.is_valid(&answer.word) {
            return Err(GameError::InvalidWord);
        }

        let base_score = score_word(&answer.word)?;
        let adjusted_score =
            adjust_score(base_score, answer.elapsed_secs, self.config.time_limit_secs);

        self.used_words.insert(key);
        self.total_score += adjusted_score;

        let result = RoundResult {
            round: self.round_count() + 1,
            word: answer.word,
            base_score,
            adjusted_score,
            elapsed_secs: answer.elapsed_secs,
            total_score: self.total_score,
        };
        self.rounds.push(result.clone());

        tracing::debug!(
            round = result.round,
            base_score,
            adjusted_score,
            total = self.total_score,
            "round complete"
        );
        Ok(result)
    }

    /// Run a single attempt at the current round
    ///
    /// # Errors
    ///
    /// Any `GameError`; see [`GameError::is_retryable`] for which ones end the game.
    pub fn play_round<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<RoundResult, GameError>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let expected_length = generate_length(&mut self.rng);
        let answer = read_timed_word(
            input,
            output,
            &mut self.clock,
            expected_length,
            self.config.time_limit_secs,
        )?;
        self.submit(answer)
    }

    /// Play until the configured number of rounds is complete
    ///
    /// Rejected attempts are reported on `output` and retried. If `input`
    /// closes early the game ends with the score so far.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Io` if the terminal cannot be read or written.
    pub fn play<I, O>(mut self, input: &mut I, output: &mut O) -> Result<GameSummary, GameError>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        let mut finished = true;

        while !self.is_over() {
            match self.play_round(input, output) {
                Ok(result) => writeln!(output, "{}", round_summary_line(&result))?,
                Err(err) if err.is_retryable() => {
                    tracing::debug!(error = %err, round = self.round_count() + 1, "attempt rejected");
                    writeln!(output, "{err}")?;
                }
                Err(GameError::InputClosed) => {
                    tracing::warn!(rounds = self.round_count(), "input closed mid-game");
                    writeln!(output)?;
                    finished = false;
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        writeln!(output, "{}", game_over_line(self.total_score))?;
        output.flush()?;

        Ok(GameSummary {
            rounds: self.rounds,
            total_score: self.total_score,
            finished,
        })
    }
}
