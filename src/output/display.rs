//! Display functions for game state and results

use super::formatters::{create_progress_bar, hint_slots, spaced_word};
use crate::core::{Category, Difficulty};
use crate::game::GameSession;
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "                    H A N G M A N                    "
            .bright_yellow()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out)
}

/// Print the board for a running session
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_state<W: Write>(out: &mut W, session: &GameSession<'_>) -> io::Result<()> {
    let difficulty = session.difficulty();
    let tried: String = session
        .tried_letters()
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "  Word:      {}",
        spaced_word(&session.masked_word()).bright_white().bold()
    )?;
    writeln!(
        out,
        "  Attempts:  [{}] {} left",
        create_progress_bar(session.attempts_left(), difficulty.max_attempts(), 20).green(),
        session.attempts_left()
    )?;
    writeln!(out, "  Errors:    {}", session.errors().to_string().red())?;
    writeln!(
        out,
        "  Hints:     {} {}/{}",
        hint_slots(session.hints_used(), difficulty.max_hints()).yellow(),
        session.hints_used(),
        difficulty.max_hints()
    )?;
    if !tried.is_empty() {
        writeln!(out, "  Tried:     {}", tried.bright_black())?;
    }
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print the list of commands
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  • Type a LETTER to guess")?;
    writeln!(out, "  • 1 or CATEGORY - category hint")?;
    writeln!(out, "  • 2 or LETTER   - reveal a letter")?;
    writeln!(out, "  • 3 or HINT     - show the clue")?;
    writeln!(out, "  • 4 or HELP     - show help")?;
    writeln!(out, "  • QUIT          - end the game")
}

/// Print the rules and hint descriptions
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_help<W: Write>(out: &mut W, difficulty: Difficulty) -> io::Result<()> {
    writeln!(out, "\n{}", " HELP ".bright_cyan().bold())?;
    writeln!(out)?;
    writeln!(out, "GOAL:")?;
    writeln!(out, "  Guess the word letter by letter before you run out of attempts.")?;
    writeln!(out)?;
    writeln!(out, "RULES:")?;
    writeln!(
        out,
        "  • You have {} attempts on {} difficulty.",
        difficulty.max_attempts(),
        difficulty.display_name()
    )?;
    writeln!(out, "  • You can use up to {} hints.", difficulty.max_hints())?;
    writeln!(out, "  • Each hint kind can be used only once per game.")?;
    writeln!(out, "  • A wrong letter costs one attempt.")?;
    writeln!(out)?;
    writeln!(out, "HINTS:")?;
    writeln!(out, "  1. Category: shows the category of the word.")?;
    writeln!(out, "  2. Letter:   reveals the first hidden letter.")?;
    writeln!(out, "  3. Clue:     shows a descriptive clue.")?;
    writeln!(out)
}

/// Print the difficulty menu with each tier's budgets
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_difficulty_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nChoose a difficulty:")?;
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        writeln!(
            out,
            "  {}. {:<7} - {} attempts, {} hints",
            i + 1,
            difficulty.display_name().to_uppercase(),
            difficulty.max_attempts(),
            difficulty.max_hints()
        )?;
    }
    write!(out, "\nOption (1-3, Enter for MEDIUM): ")
}

/// Print the category menu, with "random" as the last option
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_category_menu<W: Write>(out: &mut W, choices: &[(Category, String)]) -> io::Result<()> {
    writeln!(out, "\nChoose a category:")?;
    for (i, (_, label)) in choices.iter().enumerate() {
        writeln!(out, "  {}. {label}", i + 1)?;
    }
    writeln!(out, "  {}. RANDOM (any category)", choices.len() + 1)?;
    write!(out, "\nOption (1-{}): ", choices.len() + 1)
}

/// Print the summary of a finished session
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_final_result<W: Write>(
    out: &mut W,
    session: &GameSession<'_>,
    category_label: &str,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    if session.is_won() {
        writeln!(
            out,
            "{}",
            "    🎉  CONGRATULATIONS, YOU WON!  🎉    ".bright_green().bold()
        )?;
    } else {
        writeln!(
            out,
            "{}",
            "    💀  YOU LOST - no attempts left  💀    ".bright_red().bold()
        )?;
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out)?;
    writeln!(
        out,
        "  The word was:  {}",
        session.target().word().bright_yellow().bold()
    )?;
    writeln!(out, "  Category:      {category_label}")?;
    writeln!(out, "  Errors made:   {}", session.errors())?;
    writeln!(out, "  Hints used:    {}", session.hints_used())?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CategoryConfig, WordRecord};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn state_shows_mask_and_counters() {
        let record =
            WordRecord::new("GATO", "ANIMALES", "Mascota felina", &CategoryConfig::default())
                .unwrap();
        let mut session = GameSession::start(&record, Difficulty::Medium);
        session.guess('g');
        session.guess('z');

        let text = render(|out| write_state(out, &session));
        assert!(text.contains("G _ _ _"));
        assert!(text.contains("6 left"));
        assert!(text.contains("Tried:     G Z"));
    }

    #[test]
    fn final_result_reveals_word() {
        let record =
            WordRecord::new("SOL", "OBJETOS", "Brilla", &CategoryConfig::default()).unwrap();
        let mut session = GameSession::start(&record, Difficulty::Hard);
        for letter in ['s', 'o', 'l'] {
            session.guess(letter);
        }

        let text = render(|out| write_final_result(out, &session, "Objetos"));
        assert!(text.contains("YOU WON"));
        assert!(text.contains("The word was:  SOL"));
        assert!(text.contains("Category:      Objetos"));
    }

    #[test]
    fn category_menu_lists_random_last() {
        let choices = vec![
            (Category::new("ANIMALES"), "Animales".to_string()),
            (Category::new("PAISES"), "Paises".to_string()),
        ];
        let text = render(|out| write_category_menu(out, &choices));
        assert!(text.contains("1. Animales"));
        assert!(text.contains("3. RANDOM"));
    }

    #[test]
    fn difficulty_menu_shows_budgets() {
        let text = render(write_difficulty_menu::<Vec<u8>>);
        assert!(text.contains("EASY    - 10 attempts, 5 hints"));
        assert!(text.contains("HARD    - 5 attempts, 2 hints"));
    }
}
