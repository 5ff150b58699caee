//! Supported game languages

use std::fmt;
use std::str::FromStr;

/// A playable language, selecting the word list and save files
///
/// Each language owns an independent daily word, session, and statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
}

impl Language {
    /// All supported languages
    pub const ALL: [Self; 2] = [Self::English, Self::French];

    /// Two-letter language code, used for save-file naming
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "Français",
        }
    }

    /// Parse a language from its code or name
    ///
    /// Accepts "en"/"english" and "fr"/"french", case-insensitive.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "fr" | "french" | "francais" => Some(Self::French),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Unknown language: {s} (expected 'en' or 'fr')"))
    }
}
