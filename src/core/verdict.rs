//! Guess evaluation
//!
//! Scores a submitted guess letter-by-letter against the target word,
//! with Wordle's exact duplicate-letter accounting.

use super::word::{WORD_LEN, Word};

/// Per-letter classification of a guess
///
/// Variants are ordered by display priority: a keyboard key already marked
/// `Correct` is never downgraded to `Present` or `Wrong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    /// No guess yet at this cell
    Empty,
    /// Letter absent from the target, or all copies already accounted for
    Wrong,
    /// Letter exists elsewhere in the target
    Present,
    /// Letter matches its position
    Correct,
}

/// Result of evaluating one guess against the target
///
/// Immutable, derived purely from (guess, target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    guess: Word,
    verdicts: [Verdict; WORD_LEN],
    is_correct: bool,
}

impl GuessResult {
    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (`Correct`) and debit them from the
    ///    target's letter pool
    /// 2. Second pass, left to right: mark `Present` while the pool still has
    ///    copies of the letter, `Wrong` once it is exhausted
    ///
    /// The pool accounting is what keeps repeated letters honest: a letter
    /// never collects more `Correct` + `Present` verdicts than the target
    /// contains copies of it. Length mismatch is unrepresentable here since
    /// both arguments are fixed-length `Word`s.
    ///
    /// # Examples
    /// ```
    /// use daily_word::core::{GuessResult, Verdict, Word};
    ///
    /// let guess = Word::new("ALARM").unwrap();
    /// let target = Word::new("APPLE").unwrap();
    /// let result = GuessResult::evaluate(&guess, &target);
    ///
    /// // A matches position 0; L is elsewhere; the second A is out of copies
    /// assert_eq!(
    ///     result.verdicts(),
    ///     &[
    ///         Verdict::Correct,
    ///         Verdict::Present,
    ///         Verdict::Wrong,
    ///         Verdict::Wrong,
    ///         Verdict::Wrong,
    ///     ]
    /// );
    /// assert!(!result.is_correct());
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut verdicts = [Verdict::Wrong; WORD_LEN];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        // Allow: index needed to access guess[i], target[i], and set verdicts[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.letter_at(i) == target.letter_at(i) {
                verdicts[i] = Verdict::Correct;

                if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, while unconsumed copies remain
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if verdicts[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                verdicts[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self {
            is_correct: guess == target,
            guess: guess.clone(),
            verdicts,
        }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Per-position verdicts, in guess order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.verdicts
    }

    /// Whether the guess matched the target exactly
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.is_correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts_for(guess: &str, target: &str) -> [Verdict; WORD_LEN] {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        *GuessResult::evaluate(&guess, &target).verdicts()
    }

    #[test]
    fn all_wrong_when_no_letters_shared() {
        assert_eq!(verdicts_for("ABCDE", "FGHIJ"), [Verdict::Wrong; WORD_LEN]);
    }

    #[test]
    fn all_correct_on_exact_match() {
        let word = Word::new("CRANE").unwrap();
        let result = GuessResult::evaluate(&word, &word);

        assert_eq!(result.verdicts(), &[Verdict::Correct; WORD_LEN]);
        assert!(result.is_correct());
    }

    #[test]
    fn is_correct_iff_equal() {
        let target = Word::new("TABLE").unwrap();
        let near_miss = Word::new("CABLE").unwrap();

        assert!(GuessResult::evaluate(&target, &target).is_correct());
        assert!(!GuessResult::evaluate(&near_miss, &target).is_correct());
    }

    #[test]
    fn alarm_vs_apple() {
        // A:correct, L:present (APPLE has L at pos 3), second A: the only A
        // was consumed by the green, R and M absent
        assert_eq!(
            verdicts_for("ALARM", "APPLE"),
            [
                Verdict::Correct,
                Verdict::Present,
                Verdict::Wrong,
                Verdict::Wrong,
                Verdict::Wrong,
            ]
        );
    }

    #[test]
    fn paper_vs_apple() {
        // P:present, A:present, P:correct, E:present, R:wrong
        assert_eq!(
            verdicts_for("PAPER", "APPLE"),
            [
                Verdict::Present,
                Verdict::Present,
                Verdict::Correct,
                Verdict::Present,
                Verdict::Wrong,
            ]
        );
    }

    #[test]
    fn speed_vs_erase_both_es_present() {
        // ERASE has two E's, so both misplaced E's in SPEED count
        assert_eq!(
            verdicts_for("SPEED", "ERASE"),
            [
                Verdict::Present,
                Verdict::Wrong,
                Verdict::Present,
                Verdict::Present,
                Verdict::Wrong,
            ]
        );
    }

    #[test]
    fn green_consumes_pool_before_yellows() {
        // ROBOT vs FLOOR: first O yellow, second O green, T wrong
        assert_eq!(
            verdicts_for("ROBOT", "FLOOR"),
            [
                Verdict::Present,
                Verdict::Present,
                Verdict::Wrong,
                Verdict::Correct,
                Verdict::Wrong,
            ]
        );
    }

    #[test]
    fn letter_frequency_law() {
        // Correct + Present for any letter never exceeds its count in the target
        let pairs = [
            ("SPEED", "ERASE"),
            ("ALARM", "APPLE"),
            ("AAAAA", "ABOUT"),
            ("EERIE", "SPEED"),
            ("LLAMA", "SMALL"),
        ];

        for (guess, target) in pairs {
            let guess = Word::new(guess).unwrap();
            let target = Word::new(target).unwrap();
            let result = GuessResult::evaluate(&guess, &target);
            let target_counts = target.letter_counts();

            for letter in b'A'..=b'Z' {
                let credited = (0..WORD_LEN)
                    .filter(|&i| {
                        guess.letter_at(i) == letter
                            && matches!(
                                result.verdicts()[i],
                                Verdict::Correct | Verdict::Present
                            )
                    })
                    .count() as u8;
                let in_target = target_counts.get(&letter).copied().unwrap_or(0);
                assert!(
                    credited <= in_target,
                    "{}: letter {} credited {credited} > {in_target}",
                    guess.text(),
                    letter as char
                );
            }
        }
    }

    #[test]
    fn verdict_priority_ordering() {
        assert!(Verdict::Correct > Verdict::Present);
        assert!(Verdict::Present > Verdict::Wrong);
        assert!(Verdict::Wrong > Verdict::Empty);
    }
}
