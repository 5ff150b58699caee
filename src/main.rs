//! Daily Word - CLI
//!
//! Daily word-guessing game for English and French, with TUI and plain CLI
//! modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use daily_word::{
    commands::{run_simple, run_stats},
    core::Language,
    game::{GameSession, InstantReward, today},
    interactive::{App, run_tui},
    storage::JsonFileStore,
    wordlists::WordBank,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "daily_word",
    about = "Daily word-guessing game for English and French",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language: 'en' (default) or 'fr'
    #[arg(short, long, global = true, default_value = "en")]
    language: Language,

    /// JSON word list override: {"english": [...], "french": [...]}
    #[arg(short, long, global = true)]
    words: Option<PathBuf>,

    /// Directory for saved games and statistics
    #[arg(short, long, global = true, default_value = ".daily_word")]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Show statistics for the selected language
    Stats,
}

/// Build the word bank, applying the optional refresh file
///
/// Refresh is best-effort: a missing or malformed file keeps the embedded
/// lists and the warning is already logged by the bank.
fn load_word_bank(words: Option<&PathBuf>) -> WordBank {
    let mut bank = WordBank::embedded();
    if let Some(path) = words {
        let _ = bank.refresh_from_file(path);
    }
    bank
}

fn start_session(
    language: Language,
    data_dir: PathBuf,
    bank: &WordBank,
) -> Result<GameSession<JsonFileStore, InstantReward>> {
    let store = JsonFileStore::new(data_dir);
    let mut session = GameSession::new(language, store, InstantReward);
    session.initialize(bank, today())?;
    Ok(session)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let bank = load_word_bank(cli.words.as_ref());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let session = start_session(cli.language, cli.data_dir, &bank)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = start_session(cli.language, cli.data_dir, &bank)?;
            run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            let store = JsonFileStore::new(cli.data_dir);
            run_stats(&store, cli.language)?;
            Ok(())
        }
    }
}
