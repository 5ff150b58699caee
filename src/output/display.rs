//! Display functions for the CLI front end

use super::formatters::{colored_guess_row, share_grid};
use crate::core::{GuessResult, Language};
use crate::game::GameStats;
use colored::Colorize;

/// Print the board so far, one colored row per guess
pub fn print_board(results: &[GuessResult], attempt_cap: usize) {
    println!();
    for result in results {
        println!("  {}", colored_guess_row(result));
    }
    for _ in results.len()..attempt_cap {
        println!("  {}", " _   _   _   _   _ ".bright_black());
    }
    println!();
}

/// Print the end-of-game banner with the shareable grid
pub fn print_game_over(results: &[GuessResult], won: bool, target: &str) {
    println!();
    if won {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", results.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Out of tries - the word was {target}")
                .red()
                .bold()
        );
    }
    println!("\n{}\n", share_grid(results));
}

/// Print the stats panel for one language
pub fn print_stats(stats: &GameStats, language: Language) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {} ",
        "STATISTICS:".bright_cyan().bold(),
        language.display_name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:          {}", stats.total_played);
    println!(
        "   Win rate:        {}",
        format!("{}%", stats.win_rate()).bright_yellow()
    );
    println!(
        "   Current streak:  {}",
        stats.current_streak.to_string().green()
    );
    println!("   Max streak:      {}", stats.max_streak);
    println!();
}
