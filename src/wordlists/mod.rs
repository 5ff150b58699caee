//! Word lists for the daily game
//!
//! Embedded per-language word lists, the refreshable word bank, and the
//! deterministic daily selector.

mod bank;
mod embedded;
pub mod loader;
pub mod selector;

pub use bank::WordBank;
pub use embedded::{ENGLISH, ENGLISH_COUNT, FRENCH, FRENCH_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_count_matches_const() {
        assert_eq!(ENGLISH.len(), ENGLISH_COUNT);
    }

    #[test]
    fn french_count_matches_const() {
        assert_eq!(FRENCH.len(), FRENCH_COUNT);
    }

    #[test]
    fn english_words_are_valid() {
        // All answers should be 5 letters, uppercase
        for &word in ENGLISH {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn french_words_are_valid() {
        for &word in FRENCH {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn lists_have_no_duplicates() {
        let english: std::collections::HashSet<_> = ENGLISH.iter().collect();
        assert_eq!(english.len(), ENGLISH.len());

        let french: std::collections::HashSet<_> = FRENCH.iter().collect();
        assert_eq!(french.len(), FRENCH.len());
    }
}
