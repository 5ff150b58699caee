//! Game persistence
//!
//! The session persists two records per language: the current day's game and
//! the lifetime statistics. Implementations are last-write-wins; languages
//! never share a record.

mod json_store;

pub use json_store::JsonFileStore;

use crate::core::Language;
use crate::game::GameStats;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io;

/// Persisted snapshot of one (language, day) game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    /// ISO calendar day ("YYYY-MM-DD") the game belongs to
    pub date: String,
    /// Target word of the day
    pub word: String,
    /// Submitted guesses, in submission order
    pub guesses: Vec<String>,
    pub game_over: bool,
    pub won: bool,
    #[serde(default)]
    pub started_at_ms: i64,
    #[serde(default)]
    pub ended_at_ms: i64,
    /// Whether the bonus sixth attempt has been unlocked
    #[serde(default)]
    pub extra_try: bool,
}

/// Error type for store operations
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "store I/O error: {e}"),
            Self::Serde(e) => write!(f, "store serialization error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serde(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}

/// Persistence seam consumed by the session
///
/// Loads must complete before gameplay resumes; there is no caching layer in
/// front of an implementation.
pub trait GameStore {
    /// Persist the day's game for a language
    ///
    /// # Errors
    /// Returns `StoreError` if the record cannot be written.
    fn save_game(&mut self, game: &SavedGame, language: Language) -> Result<(), StoreError>;

    /// Load the stored game for a language, if any
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be read.
    fn load_game(&self, language: Language) -> Result<Option<SavedGame>, StoreError>;

    /// Persist the lifetime stats for a language
    ///
    /// # Errors
    /// Returns `StoreError` if the record cannot be written.
    fn save_stats(&mut self, stats: &GameStats, language: Language) -> Result<(), StoreError>;

    /// Load the lifetime stats for a language, defaulting to zeroes
    ///
    /// # Errors
    /// Returns `StoreError` if the backing store cannot be read.
    fn load_stats(&self, language: Language) -> Result<GameStats, StoreError>;
}

/// In-memory store for tests and ephemeral play
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    games: HashMap<Language, SavedGame>,
    stats: HashMap<Language, GameStats>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn save_game(&mut self, game: &SavedGame, language: Language) -> Result<(), StoreError> {
        self.games.insert(language, game.clone());
        Ok(())
    }

    fn load_game(&self, language: Language) -> Result<Option<SavedGame>, StoreError> {
        Ok(self.games.get(&language).cloned())
    }

    fn save_stats(&mut self, stats: &GameStats, language: Language) -> Result<(), StoreError> {
        self.stats.insert(language, *stats);
        Ok(())
    }

    fn load_stats(&self, language: Language) -> Result<GameStats, StoreError> {
        Ok(self.stats.get(&language).copied().unwrap_or_default())
    }
}
