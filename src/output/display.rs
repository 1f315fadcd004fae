//! Display functions for the CLI

use super::formatters::{create_progress_bar, dictionary_warning_line};
use crate::commands::WordReport;
use crate::core::Dictionary;
use crate::game::{GameConfig, GameError, GameSummary};
use colored::Colorize;
use std::io;

/// Print the welcome banner before a game
pub fn print_banner(config: &GameConfig, dictionary: &Dictionary) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Scrabble Sprint - Word Game                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Type a word of the requested length within {} seconds.",
        config.time_limit_secs.to_string().bright_yellow()
    );
    println!(
        "Words score Scrabble letter values; {} valid words finish the game.",
        config.rounds.to_string().bright_cyan().bold()
    );
    println!(
        "{}\n",
        format!("Dictionary: {} words", dictionary.len()).bright_black()
    );
}

/// Warn that the dictionary could not be read
pub fn print_dictionary_warning(error: &io::Error) {
    eprintln!("{}", dictionary_warning_line(error).yellow().bold());
}

/// Print a per-round recap after the game-over line
pub fn print_game_summary(summary: &GameSummary) {
    if summary.rounds.is_empty() {
        return;
    }

    let best = summary
        .rounds
        .iter()
        .map(|r| r.adjusted_score)
        .max()
        .unwrap_or(0);

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROUND RECAP".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for round in &summary.rounds {
        let bar = create_progress_bar(round.adjusted_score, best, 20);
        println!(
            "  {:>2}. {:<8} {} {:>3} pts  {:>5.1}s",
            round.round.to_string().bright_black(),
            round.word.to_uppercase().bright_white().bold(),
            bar.green(),
            round.adjusted_score,
            round.elapsed_secs
        );
    }

    if !summary.finished {
        println!(
            "\n  {}",
            format!("Input ended after {} rounds.", summary.rounds.len()).yellow()
        );
    }
    println!();
}

/// Print base scores and dictionary membership for the `score` command
pub fn print_score_report(reports: &[WordReport]) {
    println!("\n{}", "─".repeat(60).cyan());
    for report in reports {
        let score = match report.score {
            Some(points) => format!("{points} pts").bright_yellow().bold(),
            None => GameError::InvalidCharacters.to_string().red(),
        };
        let membership = if report.in_dictionary {
            "✓ in dictionary".green()
        } else {
            "✗ not in dictionary".red()
        };
        println!(
            "  {:<12} {}  {}",
            report.word.to_uppercase().bright_white().bold(),
            score,
            membership
        );
    }
    println!("{}", "─".repeat(60).cyan());
}
