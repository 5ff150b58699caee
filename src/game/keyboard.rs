//! On-screen keyboard state
//!
//! Accumulates the best-known verdict for each letter across all guesses of
//! a session. Precedence is strictly increasing: Correct > Present > Wrong,
//! so a key already shown green never turns yellow or gray.

use crate::core::{GuessResult, Verdict};
use rustc_hash::FxHashMap;

/// Letter → best-known verdict map for one language's session
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    verdicts: FxHashMap<u8, Verdict>,
}

impl KeyboardState {
    /// Empty keyboard, all keys `Verdict::Empty`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the keyboard by folding over guess results in order
    #[must_use]
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a GuessResult>,
    {
        let mut keyboard = Self::new();
        for result in results {
            keyboard.absorb(result);
        }
        keyboard
    }

    /// Fold one guess result into the map, upgrading only
    pub fn absorb(&mut self, result: &GuessResult) {
        for (i, &verdict) in result.verdicts().iter().enumerate() {
            let letter = result.guess().letter_at(i);
            let entry = self.verdicts.entry(letter).or_insert(Verdict::Empty);
            if verdict > *entry {
                *entry = verdict;
            }
        }
    }

    /// Best-known verdict for a letter (`Empty` if never guessed)
    #[must_use]
    pub fn verdict(&self, letter: u8) -> Verdict {
        self.verdicts
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(Verdict::Empty)
    }
}
