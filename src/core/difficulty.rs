//! Difficulty tiers
//!
//! Each tier fixes how many wrong guesses a session tolerates and how many hints it may
//! hand out.

use std::fmt;

/// A named difficulty tier with fixed budgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// 10 attempts, 5 hints
    Easy,
    /// 7 attempts, 3 hints
    #[default]
    Medium,
    /// 5 attempts, 2 hints
    Hard,
}

impl Difficulty {
    /// All tiers from easiest to hardest
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Wrong guesses allowed before the session is lost
    #[must_use]
    pub const fn max_attempts(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 7,
            Self::Hard => 5,
        }
    }

    /// Hints available per session
    #[must_use]
    pub const fn max_hints(self) -> u32 {
        match self {
            Self::Easy => 5,
            Self::Medium => 3,
            Self::Hard => 2,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Resolve a difficulty from a name or menu number
    ///
    /// Supported names: "easy"/"facil"/"1", "medium"/"medio"/"2", "hard"/"dificil"/"3".
    /// Defaults to medium if the name is unrecognized or empty.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "1" | "easy" | "facil" | "fácil" => Self::Easy,
            "3" | "hard" | "dificil" | "difícil" => Self::Hard,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budgets_per_tier() {
        assert_eq!(
            (Difficulty::Easy.max_attempts(), Difficulty::Easy.max_hints()),
            (10, 5)
        );
        assert_eq!(
            (Difficulty::Medium.max_attempts(), Difficulty::Medium.max_hints()),
            (7, 3)
        );
        assert_eq!(
            (Difficulty::Hard.max_attempts(), Difficulty::Hard.max_hints()),
            (5, 2)
        );
    }

    #[test]
    fn medium_is_default() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn from_name_accepts_aliases() {
        assert_eq!(Difficulty::from_name("EASY"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("Fácil"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("1"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name(" hard "), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("dificil"), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("2"), Difficulty::Medium);
    }

    #[test]
    fn from_name_defaults_to_medium() {
        assert_eq!(Difficulty::from_name(""), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("impossible"), Difficulty::Medium);
    }

    #[test]
    fn all_is_ordered_by_budget() {
        let attempts: Vec<u32> = Difficulty::ALL.iter().map(|d| d.max_attempts()).collect();
        assert_eq!(attempts, [10, 7, 5]);
    }
}
