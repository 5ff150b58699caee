//! Daily word selection
//!
//! Deterministic (word list, calendar date) → target word mapping. Every
//! player sees the same puzzle for a given language and day because the
//! index depends only on the date and the ordered list.

use crate::core::Word;
use chrono::NaiveDate;
use log::warn;

/// Substitute answer when a word list is empty or unavailable
pub const FALLBACK: &str = "ABCDE";

/// First day of the daily rotation; day 0 maps to list index 0
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).expect("epoch is a valid date")
}

/// Select the daily word for `date` from an ordered word list
///
/// The index is `(date - 2026-01-01).rem_euclid(len)`, so dates before the
/// epoch still resolve to a valid entry and the rotation wraps around the
/// list. An empty list degrades to [`FALLBACK`] rather than failing.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daily_word::core::Word;
/// use daily_word::wordlists::selector::daily_word;
///
/// let words = vec![Word::new("TABLE").unwrap(), Word::new("CHAIR").unwrap()];
/// let day0 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let day1 = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
///
/// assert_eq!(daily_word(&words, day0).text(), "TABLE");
/// assert_eq!(daily_word(&words, day1).text(), "CHAIR");
/// ```
///
/// # Panics
/// Will not panic - the fallback constant is a valid word.
#[must_use]
pub fn daily_word(words: &[Word], date: NaiveDate) -> Word {
    if words.is_empty() {
        warn!("empty word list, serving fallback word");
        return Word::new(FALLBACK).expect("fallback is a valid word");
    }

    let days = date.signed_duration_since(epoch()).num_days();
    let index = days.rem_euclid(words.len() as i64) as usize;
    words[index].clone()
}
