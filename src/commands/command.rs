//! Player input parsing

/// One player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Guess a single letter
    Guess(char),
    HintCategory,
    HintLetter,
    HintText,
    Help,
    Quit,
}

impl Command {
    /// Parse a line of player input
    ///
    /// A single alphabetic character is always a guess, so one-letter aliases such as
    /// `q` are guesses too. Other input is matched case-insensitively against the
    /// command names and menu numbers. Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use ahorcado::commands::Command;
    ///
    /// assert_eq!(Command::parse("a"), Some(Command::Guess('a')));
    /// assert_eq!(Command::parse(" hint "), Some(Command::HintText));
    /// assert_eq!(Command::parse("42"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        let mut chars = input.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_alphabetic()
        {
            return Some(Self::Guess(c));
        }

        match input.to_uppercase().as_str() {
            "1" | "CAT" | "CATEGORY" | "CATEGORIA" => Some(Self::HintCategory),
            "2" | "LETTER" | "LETRA" => Some(Self::HintLetter),
            "3" | "HINT" | "CLUE" | "PISTA" => Some(Self::HintText),
            "4" | "HELP" | "AYUDA" => Some(Self::Help),
            "QUIT" | "EXIT" | "SALIR" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters_are_guesses() {
        assert_eq!(Command::parse("g"), Some(Command::Guess('g')));
        assert_eq!(Command::parse(" Z "), Some(Command::Guess('Z')));
        assert_eq!(Command::parse("ñ"), Some(Command::Guess('ñ')));
        assert_eq!(Command::parse("q"), Some(Command::Guess('q')));
    }

    #[test]
    fn menu_numbers() {
        assert_eq!(Command::parse("1"), Some(Command::HintCategory));
        assert_eq!(Command::parse("2"), Some(Command::HintLetter));
        assert_eq!(Command::parse("3"), Some(Command::HintText));
        assert_eq!(Command::parse("4"), Some(Command::Help));
    }

    #[test]
    fn named_commands_any_case() {
        assert_eq!(Command::parse("cat"), Some(Command::HintCategory));
        assert_eq!(Command::parse("Categoria"), Some(Command::HintCategory));
        assert_eq!(Command::parse("LETRA"), Some(Command::HintLetter));
        assert_eq!(Command::parse("pista"), Some(Command::HintText));
        assert_eq!(Command::parse("ayuda"), Some(Command::Help));
        assert_eq!(Command::parse("salir"), Some(Command::Quit));
        assert_eq!(Command::parse("Exit"), Some(Command::Quit));
    }

    #[test]
    fn unrecognized_input() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("5"), None);
        assert_eq!(Command::parse("ab"), None);
        assert_eq!(Command::parse("?"), None);
    }
}
