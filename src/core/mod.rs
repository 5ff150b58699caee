//! Core domain types for the daily word game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear semantics.

mod language;
mod verdict;
mod word;

pub use language::Language;
pub use verdict::{GuessResult, Verdict};
pub use word::{WORD_LEN, Word, WordError};
