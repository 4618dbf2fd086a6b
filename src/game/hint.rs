//! Hint outcomes

use crate::core::Category;
use std::fmt;

/// Result of a hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    /// The category of the hidden word
    Category(Category),
    /// A letter that was revealed in every position it occupies
    Letter(char),
    /// The descriptive clue of the hidden word
    Clue(String),
    /// This hint kind was already used, the hint budget is spent, or the session is over
    Unavailable,
    /// Nothing is left to reveal; no budget was consumed
    AllRevealed,
}

impl Hint {
    /// Whether the request was granted and consumed a hint
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Category(_) | Self::Letter(_) | Self::Clue(_))
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(category) => write!(f, "Category: {category}"),
            Self::Letter(letter) => write!(f, "Revealed letter: {letter}"),
            Self::Clue(clue) => write!(f, "Clue: {clue}"),
            Self::Unavailable => f.write_str("Not available."),
            Self::AllRevealed => f.write_str("All letters are already revealed."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_hints() {
        assert!(Hint::Category(Category::new("ANIMALES")).is_granted());
        assert!(Hint::Letter('A').is_granted());
        assert!(Hint::Clue("Maulla".to_string()).is_granted());
        assert!(!Hint::Unavailable.is_granted());
        assert!(!Hint::AllRevealed.is_granted());
    }

    #[test]
    fn display_text() {
        assert_eq!(
            Hint::Category(Category::new("animales")).to_string(),
            "Category: ANIMALES"
        );
        assert_eq!(Hint::Letter('G').to_string(), "Revealed letter: G");
        assert_eq!(Hint::Clue("Maulla".into()).to_string(), "Clue: Maulla");
        assert_eq!(Hint::Unavailable.to_string(), "Not available.");
    }
}
