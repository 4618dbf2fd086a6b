//! Line-based console front-end
//!
//! Text prompts over any reader/writer pair; the binary wires it to stdin and stdout.

use super::GameView;
use crate::core::{Category, Difficulty};
use crate::game::GameSession;
use crate::output;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Console implementation of [`GameView`]
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one trimmed line, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush().context("failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Give back the writer, for inspecting what was printed
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> GameView for ConsoleView<R, W> {
    fn initialize(&mut self) -> Result<()> {
        output::write_banner(&mut self.output)?;
        Ok(())
    }

    fn request_difficulty(&mut self) -> Result<Difficulty> {
        output::write_difficulty_menu(&mut self.output)?;
        let choice = self.read_line()?.unwrap_or_default();
        Ok(Difficulty::from_name(&choice))
    }

    fn request_category(&mut self, choices: &[(Category, String)]) -> Result<Option<Category>> {
        output::write_category_menu(&mut self.output, choices)?;
        let choice = self.read_line()?.unwrap_or_default();

        // Anything but a listed number means any category
        Ok(choice
            .parse::<usize>()
            .ok()
            .and_then(|option| option.checked_sub(1))
            .and_then(|index| choices.get(index))
            .map(|(category, _)| category.clone()))
    }

    fn request_input(&mut self) -> Result<Option<String>> {
        writeln!(self.output)?;
        output::write_menu(&mut self.output)?;
        write!(self.output, "\nYour choice: ")?;
        self.read_line()
    }

    fn display_state(&mut self, session: &GameSession<'_>) -> Result<()> {
        output::write_state(&mut self.output, session)?;
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }

    fn show_help(&mut self, difficulty: Difficulty) -> Result<()> {
        output::write_help(&mut self.output, difficulty)?;
        Ok(())
    }

    fn show_final_result(&mut self, session: &GameSession<'_>, category_label: &str) -> Result<()> {
        output::write_final_result(&mut self.output, session, category_label)?;
        Ok(())
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        write!(self.output, "\nPlay again? (y/n): ")?;
        let answer = self.read_line()?.unwrap_or_default().to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes" | "s" | "si" | "sí"))
    }

    fn cleanup(&mut self) -> Result<()> {
        writeln!(self.output, "\n👋 Thanks for playing!\n")?;
        self.output.flush()?;
        Ok(())
    }
}
