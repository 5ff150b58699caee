//! Per-language game statistics
//!
//! A pure reducer applied exactly once per finished game.

use serde::{Deserialize, Serialize};

/// Lifetime statistics for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub total_played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl GameStats {
    /// Fold one finished game into the stats
    ///
    /// `total_played` always increments; a win extends the streak (and the
    /// record streak if beaten), a loss resets it to zero.
    ///
    /// # Examples
    /// ```
    /// use daily_word::game::GameStats;
    ///
    /// let stats = GameStats::default().updated(true).updated(false);
    /// assert_eq!(stats.total_played, 2);
    /// assert_eq!(stats.wins, 1);
    /// assert_eq!(stats.current_streak, 0);
    /// assert_eq!(stats.max_streak, 1);
    /// ```
    #[must_use]
    pub fn updated(self, won: bool) -> Self {
        let current_streak = if won { self.current_streak + 1 } else { 0 };
        Self {
            total_played: self.total_played + 1,
            wins: if won { self.wins + 1 } else { self.wins },
            current_streak,
            max_streak: if won {
                self.max_streak.max(current_streak)
            } else {
                self.max_streak
            },
        }
    }

    /// Win percentage (0-100), derived rather than stored
    #[must_use]
    pub const fn win_rate(self) -> u32 {
        if self.total_played == 0 {
            0
        } else {
            self.wins * 100 / self.total_played
        }
    }
}
