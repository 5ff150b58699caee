//! Simple interactive CLI mode
//!
//! Text-based daily game without the TUI.

use crate::core::WORD_LEN;
use crate::game::{BonusDecision, GameSession, RewardGate, SessionPhase, SubmitOutcome};
use crate::output::{print_board, print_game_over, print_stats};
use crate::storage::GameStore;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode on an initialized session
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// store rejects a write.
pub fn run_simple<S: GameStore, G: RewardGate>(
    session: &mut GameSession<S, G>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Daily Word - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Guess the {} word of the day ({}).",
        session.language(),
        session.date().format("%Y-%m-%d")
    );
    println!(
        "You have {} tries. Commands: 'quit', 'stats'\n",
        session.attempt_cap()
    );

    loop {
        match session.phase() {
            SessionPhase::Playing => {
                print_board(session.results(), session.attempt_cap());
                println!(
                    "Attempt {} of {}",
                    session.results().len() + 1,
                    session.attempt_cap()
                );

                let line = get_user_input(&format!("Enter a {WORD_LEN}-letter word"))?;
                match line.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Come back tomorrow!\n");
                        return Ok(());
                    }
                    "stats" => {
                        print_stats(session.stats(), session.language());
                        continue;
                    }
                    _ => {}
                }

                while !session.input().is_empty() {
                    session.delete_letter();
                }
                for c in line.chars() {
                    session.push_letter(c);
                }

                match session.submit_guess().map_err(|e| e.to_string())? {
                    SubmitOutcome::Rejected => {
                        println!(
                            "{}",
                            format!("❌ Not a valid {WORD_LEN}-letter word!").red()
                        );
                    }
                    SubmitOutcome::AwaitingBonus => {
                        print_board(session.results(), session.attempt_cap());
                    }
                    _ => {}
                }
            }
            SessionPhase::AwaitingBonus => {
                println!(
                    "{}",
                    "Out of normal tries! You can earn one bonus guess.".yellow()
                );
                let answer = get_user_input("Use the bonus try? (yes/no)")?.to_lowercase();
                let accepted = matches!(answer.as_str(), "yes" | "y");

                match session.decide_bonus(accepted).map_err(|e| e.to_string())? {
                    BonusDecision::ExtraTryGranted => {
                        println!("{}", "🎁 Bonus try unlocked!".green());
                    }
                    BonusDecision::FinishedLost | BonusDecision::Ignored => {}
                }
            }
            SessionPhase::Finished => {
                print_game_over(session.results(), session.won(), session.target().text());
                print_stats(session.stats(), session.language());
                return Ok(());
            }
            SessionPhase::Loading => {
                return Err("session was not initialized before play".to_string());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
