//! Timed word input
//!
//! Prompts for a word, blocks on a line of input and measures how long the
//! player took. The time limit is checked after the read returns; the wait
//! itself is never interrupted.

use super::GameError;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

/// Source of monotonic time for measuring answers
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&mut self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// A word submitted within the limit, with its measured answer time
#[derive(Debug, Clone, PartialEq)]
pub struct TimedWord {
    pub word: String,
    pub elapsed_secs: f64,
}

/// Prompt text for a round
#[must_use]
pub fn prompt_text(expected_length: usize, limit_secs: f64) -> String {
    format!("Enter a word of {expected_length} letters ({limit_secs}-second limit): ")
}

/// Prompt for a word of `expected_length` characters and time the answer
///
/// Only the trailing line terminator is stripped from the input.
///
/// # Errors
///
/// - `TimeExceeded` if the answer took longer than `limit_secs`
/// - `WrongLength` if the answer is not exactly `expected_length` characters
/// - `InvalidCharacters` if the line is not valid UTF-8
/// - `InputClosed` if the input reached end-of-file
/// - `Io` if writing the prompt or reading the line failed
pub fn read_timed_word<I, O, C>(
    input: &mut I,
    output: &mut O,
    clock: &mut C,
    expected_length: usize,
    limit_secs: f64,
) -> Result<TimedWord, GameError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
    C: Clock + ?Sized,
{
    let start = clock.now();
    write!(output, "{}", prompt_text(expected_length, limit_secs))?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line);
    let elapsed_secs = clock.now().saturating_sub(start).as_secs_f64();

    // The undecodable line is already consumed, so the round can be retried
    let bytes = match read {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            tracing::debug!(error = %e, "answer is not valid UTF-8");
            return Err(GameError::InvalidCharacters);
        }
        Err(e) => return Err(e.into()),
    };

    if bytes == 0 {
        return Err(GameError::InputClosed);
    }

    let word = line.trim_end_matches(['\n', '\r']).to_string();
    tracing::debug!(%word, elapsed_secs, "answer received");

    if elapsed_secs > limit_secs {
        return Err(GameError::TimeExceeded {
            elapsed: elapsed_secs,
        });
    }

    let actual = word.chars().count();
    if actual != expected_length {
        return Err(GameError::WrongLength {
            expected: expected_length,
            actual,
        });
    }

    Ok(TimedWord { word, elapsed_secs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Advances a fixed step on every reading
    struct StepClock {
        current: Duration,
        step: Duration,
    }

    impl StepClock {
        fn new(step_secs: f64) -> Self {
            Self {
                current: Duration::ZERO,
                step: Duration::from_secs_f64(step_secs),
            }
        }
    }

    impl Clock for StepClock {
        fn now(&mut self) -> Duration {
            let now = self.current;
            self.current += self.step;
            now
        }
    }

    fn read(input: &str, expected: usize, step_secs: f64) -> (Result<TimedWord, GameError>, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut clock = StepClock::new(step_secs);
        let result = read_timed_word(&mut input, &mut output, &mut clock, expected, 15.0);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn prompt_format() {
        assert_eq!(
            prompt_text(5, 15.0),
            "Enter a word of 5 letters (15-second limit): "
        );
    }

    #[test]
    fn accepts_word_of_right_length() {
        let (result, prompt) = read("apple\n", 5, 3.0);
        let timed = result.unwrap();
        assert_eq!(timed.word, "apple");
        assert!((timed.elapsed_secs - 3.0).abs() < 1e-9);
        assert_eq!(prompt, "Enter a word of 5 letters (15-second limit): ");
    }

    #[test]
    fn strips_crlf_only() {
        let (result, _) = read("apple\r\n", 5, 1.0);
        assert_eq!(result.unwrap().word, "apple");

        let (result, _) = read(" app\n", 4, 1.0);
        assert_eq!(result.unwrap().word, " app");
    }

    #[test]
    fn last_line_without_newline() {
        let (result, _) = read("cat", 3, 1.0);
        assert_eq!(result.unwrap().word, "cat");
    }

    #[test]
    fn wrong_length_rejected() {
        let (result, _) = read("apples\n", 5, 1.0);
        assert!(matches!(
            result,
            Err(GameError::WrongLength {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let (result, _) = read("café\n", 4, 1.0);
        assert_eq!(result.unwrap().word, "café");
    }

    #[test]
    fn slow_answer_rejected_before_length_check() {
        let (result, _) = read("toolongword\n", 5, 16.0);
        assert!(matches!(result, Err(GameError::TimeExceeded { .. })));
    }

    #[test]
    fn exactly_at_limit_is_accepted() {
        let (result, _) = read("apple\n", 5, 15.0);
        assert!(result.is_ok());
    }

    #[test]
    fn undecodable_line_is_retryable() {
        let mut input = Cursor::new(b"\xff\xfe\napple\n".to_vec());
        let mut output = Vec::new();
        let mut clock = StepClock::new(1.0);

        let first = read_timed_word(&mut input, &mut output, &mut clock, 5, 15.0);
        assert!(matches!(first, Err(GameError::InvalidCharacters)));

        let second = read_timed_word(&mut input, &mut output, &mut clock, 5, 15.0);
        assert_eq!(second.unwrap().word, "apple");
    }

    #[test]
    fn end_of_input_reported() {
        let (result, _) = read("", 5, 1.0);
        assert!(matches!(result, Err(GameError::InputClosed)));
    }
}
