//! Word list loading utilities
//!
//! Provides functions to build word lists from files or embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a plain text file, one word per line
///
/// Returns a vector of valid `Word` instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use daily_word::wordlists::{ENGLISH, loader::words_from_slice};
///
/// let words = words_from_slice(ENGLISH);
/// assert_eq!(words.len(), ENGLISH.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Convert owned strings to a Word vector, dropping invalid entries
#[must_use]
pub fn words_from_strings<I, S>(strings: I) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .filter_map(|s| Word::new(s.as_ref()).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["CRANE", "SLATE", "IRATE"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["CRANE", "TOOLONG", "ABC", "SLATE"];
        let words = words_from_slice(input);

        // Only "CRANE" and "SLATE" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_strings_uppercases() {
        let input = vec!["table".to_string(), "chien".to_string()];
        let words = words_from_strings(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "TABLE");
    }

    #[test]
    fn load_from_embedded_english() {
        use crate::wordlists::ENGLISH;

        let words = words_from_slice(ENGLISH);
        assert_eq!(words.len(), ENGLISH.len());
    }
}
