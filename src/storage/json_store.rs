//! JSON file-backed store
//!
//! One file per language per record kind under a data directory:
//! `game_en.json`, `stats_en.json`, `game_fr.json`, `stats_fr.json`.

use super::{GameStore, SavedGame, StoreError};
use crate::core::Language;
use crate::game::GameStats;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// File-per-record JSON store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`; the directory is created on first save
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store's data directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn game_path(&self, language: Language) -> PathBuf {
        self.dir.join(format!("game_{}.json", language.code()))
    }

    fn stats_path(&self, language: Language) -> PathBuf {
        self.dir.join(format!("stats_{}.json", language.code()))
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl GameStore for JsonFileStore {
    fn save_game(&mut self, game: &SavedGame, language: Language) -> Result<(), StoreError> {
        self.write_json(&self.game_path(language), game)
    }

    fn load_game(&self, language: Language) -> Result<Option<SavedGame>, StoreError> {
        let path = self.game_path(language);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(game) => Ok(Some(game)),
            Err(e) => {
                // Unreadable record is the same as no record
                warn!("discarding corrupt save {}: {e}", path.display());
                Ok(None)
            }
        }
    }

    fn save_stats(&mut self, stats: &GameStats, language: Language) -> Result<(), StoreError> {
        self.write_json(&self.stats_path(language), stats)
    }

    fn load_stats(&self, language: Language) -> Result<GameStats, StoreError> {
        let path = self.stats_path(language);
        if !path.exists() {
            return Ok(GameStats::default());
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(stats) => Ok(stats),
            Err(e) => {
                warn!("discarding corrupt stats {}: {e}", path.display());
                Ok(GameStats::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(tag: &str) -> JsonFileStore {
        let dir = std::env::temp_dir().join(format!("daily_word_test_{}_{tag}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        JsonFileStore::new(dir)
    }

    fn cleanup(store: &JsonFileStore) {
        let _ = fs::remove_dir_all(store.dir());
    }

    fn sample_game() -> SavedGame {
        SavedGame {
            date: "2026-02-03".to_string(),
            word: "TABLE".to_string(),
            guesses: vec!["CRANE".to_string()],
            game_over: false,
            won: false,
            started_at_ms: 1_000,
            ended_at_ms: 0,
            extra_try: false,
        }
    }

    #[test]
    fn round_trips_game_and_stats() {
        let mut store = temp_store("round_trip");
        let game = sample_game();
        let stats = GameStats {
            total_played: 3,
            wins: 2,
            current_streak: 2,
            max_streak: 2,
        };

        store.save_game(&game, Language::English).unwrap();
        store.save_stats(&stats, Language::English).unwrap();

        assert_eq!(
            store.load_game(Language::English).unwrap(),
            Some(game)
        );
        assert_eq!(store.load_stats(Language::English).unwrap(), stats);

        cleanup(&store);
    }

    #[test]
    fn missing_files_load_as_absent() {
        let store = temp_store("missing");

        assert!(store.load_game(Language::French).unwrap().is_none());
        assert_eq!(
            store.load_stats(Language::French).unwrap(),
            GameStats::default()
        );
    }

    #[test]
    fn languages_use_separate_files() {
        let mut store = temp_store("langs");

        store.save_game(&sample_game(), Language::English).unwrap();
        assert!(store.load_game(Language::French).unwrap().is_none());

        cleanup(&store);
    }

    #[test]
    fn corrupt_record_reads_as_absent() {
        let mut store = temp_store("corrupt");
        store.save_game(&sample_game(), Language::English).unwrap();

        fs::write(
            store.dir().join("game_en.json"),
            "{not valid json",
        )
        .unwrap();

        assert!(store.load_game(Language::English).unwrap().is_none());

        cleanup(&store);
    }
}
