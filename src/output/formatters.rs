//! Formatting utilities for terminal output

use crate::core::{GuessResult, Verdict};
use colored::{ColoredString, Colorize};

/// Format a row of verdicts as an emoji string
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict]) -> String {
    verdicts
        .iter()
        .map(|v| match v {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Wrong | Verdict::Empty => '⬜',
        })
        .collect()
}

/// Color one letter according to its verdict
#[must_use]
pub fn colored_letter(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Verdict::Correct => text.black().on_green(),
        Verdict::Present => text.black().on_yellow(),
        Verdict::Wrong => text.white().on_bright_black(),
        Verdict::Empty => text.normal(),
    }
}

/// Format a full guess row as colored cells
#[must_use]
pub fn colored_guess_row(result: &GuessResult) -> String {
    result
        .guess()
        .text()
        .chars()
        .zip(result.verdicts().iter())
        .map(|(letter, &verdict)| colored_letter(letter, verdict).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shareable emoji grid for a finished game, one line per guess
#[must_use]
pub fn share_grid(results: &[GuessResult]) -> String {
    results
        .iter()
        .map(|r| verdicts_to_emoji(r.verdicts()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn result(guess: &str, target: &str) -> GuessResult {
        GuessResult::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn emoji_all_wrong() {
        let r = result("ABCDE", "FGHIJ");
        assert_eq!(verdicts_to_emoji(r.verdicts()), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_correct() {
        let r = result("CRANE", "CRANE");
        assert_eq!(verdicts_to_emoji(r.verdicts()), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        // CRANE vs SLATE: A and E correct, rest wrong
        let r = result("CRANE", "SLATE");
        assert_eq!(verdicts_to_emoji(r.verdicts()), "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn share_grid_one_line_per_guess() {
        let results = vec![result("CRANE", "SLATE"), result("SLATE", "SLATE")];
        let grid = share_grid(&results);
        assert_eq!(grid.lines().count(), 2);
        assert!(grid.ends_with("🟩🟩🟩🟩🟩"));
    }
}
