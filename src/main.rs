//! Scrabble Sprint - CLI
//!
//! Timed word game scored with Scrabble letter values.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use scrabble_sprint::{
    commands::{run_play, score_words},
    core::{DEFAULT_TIME_LIMIT_SECS, Dictionary},
    game::{DEFAULT_ROUNDS, GameConfig, MAX_ROUNDS},
    output::{print_banner, print_dictionary_warning, print_game_summary, print_score_report},
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "scrabble_sprint",
    about = "Timed word game scored with Scrabble letter values",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file with one word per line
    #[arg(short, long, global = true, default_value = "words.txt")]
    dictionary: PathBuf,

    /// Valid words needed to finish a game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ROUNDS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ROUNDS))
    )]
    rounds: u32,

    /// Seconds allowed per answer
    #[arg(short, long, global = true, default_value_t = DEFAULT_TIME_LIMIT_SECS)]
    time_limit: f64,

    /// Seed for reproducible word lengths
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play,

    /// Show the letter score of words and whether the dictionary knows them
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary, falling back to an empty one if the file can't be read
fn load_dictionary(path: &Path) -> Dictionary {
    match Dictionary::load(path) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "dictionary unavailable");
            print_dictionary_warning(&e);
            Dictionary::empty()
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    if !(cli.time_limit.is_finite() && cli.time_limit > 0.0) {
        bail!("--time-limit must be a positive number of seconds");
    }

    let dictionary = load_dictionary(&cli.dictionary);
    let config = GameConfig::new(cli.rounds, cli.time_limit);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&dictionary, config, cli.seed),
        Commands::Score { words } => {
            run_score_command(&words, &dictionary);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig, seed: Option<u64>) -> Result<()> {
    print_banner(&config, dictionary);
    let summary = run_play(dictionary, config, seed)?;
    print_game_summary(&summary);
    Ok(())
}

fn run_score_command(words: &[String], dictionary: &Dictionary) {
    let reports = score_words(words, dictionary);
    print_score_report(&reports);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_default_to_ten() {
        let cli = Cli::try_parse_from(["scrabble_sprint"]).unwrap();
        assert_eq!(cli.rounds, DEFAULT_ROUNDS);
        assert!(cli.command.is_none());
    }

    #[test]
    fn rounds_outside_range_rejected() {
        assert!(Cli::try_parse_from(["scrabble_sprint", "--rounds", "0"]).is_err());
        assert!(Cli::try_parse_from(["scrabble_sprint", "--rounds", "4000000000"]).is_err());
        assert!(Cli::try_parse_from(["scrabble_sprint", "--rounds", "1000"]).is_ok());
    }
}
