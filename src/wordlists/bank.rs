//! Word bank
//!
//! Holds the ordered per-language answer lists, seeded from the embedded
//! data and refreshable from an external JSON document. Refresh is
//! best-effort: any failure keeps the current lists so startup never blocks
//! on a missing or malformed file.

use super::loader::words_from_strings;
use super::{ENGLISH, FRENCH, loader::words_from_slice};
use crate::core::{Language, Word};
use log::{info, warn};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// External refresh document: `{"english": [...], "french": [...]}`
#[derive(Debug, Deserialize)]
struct RefreshDocument {
    #[serde(default)]
    english: Vec<String>,
    #[serde(default)]
    french: Vec<String>,
}

/// Ordered per-language word lists
#[derive(Debug, Clone)]
pub struct WordBank {
    english: Vec<Word>,
    french: Vec<Word>,
}

impl WordBank {
    /// Build a bank from the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            english: words_from_slice(ENGLISH),
            french: words_from_slice(FRENCH),
        }
    }

    /// Build an empty bank (selection degrades to the fallback word)
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            english: Vec::new(),
            french: Vec::new(),
        }
    }

    /// The ordered answer list for a language
    #[must_use]
    pub fn words(&self, language: Language) -> &[Word] {
        match language {
            Language::English => &self.english,
            Language::French => &self.french,
        }
    }

    /// Replace a language's list, ignoring empty replacements
    pub fn set_words(&mut self, language: Language, words: Vec<Word>) {
        if words.is_empty() {
            warn!("ignoring empty word list for {}", language.code());
            return;
        }
        match language {
            Language::English => self.english = words,
            Language::French => self.french = words,
        }
    }

    /// Refresh both lists from a JSON document shaped
    /// `{"english": [...], "french": [...]}`
    ///
    /// Entries are uppercased and invalid words dropped. A language whose
    /// refreshed list comes back empty keeps its current list. On any read
    /// or parse error the bank is left untouched and a warning is logged;
    /// the error is also returned for callers that want to surface it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O or parse error message.
    pub fn refresh_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            warn!("word list refresh failed: {e}");
            format!("cannot read {}: {e}", path.display())
        })?;
        self.refresh_from_json(&content).map_err(|e| {
            warn!("word list refresh failed: {e}");
            e
        })
    }

    /// Refresh both lists from an in-memory JSON document
    ///
    /// # Errors
    ///
    /// Returns a parse error message; the bank is untouched on error.
    pub fn refresh_from_json(&mut self, json: &str) -> Result<(), String> {
        let doc: RefreshDocument =
            serde_json::from_str(json).map_err(|e| format!("invalid word list document: {e}"))?;

        self.set_words(Language::English, words_from_strings(doc.english));
        self.set_words(Language::French, words_from_strings(doc.french));
        info!(
            "word lists refreshed: {} english, {} french",
            self.english.len(),
            self.french.len()
        );
        Ok(())
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::embedded()
    }
}
