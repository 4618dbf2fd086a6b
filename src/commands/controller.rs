//! Session controller
//!
//! Drives game sessions against a catalog through a swappable [`GameView`] front-end.

use super::Command;
use crate::catalog::WordCatalog;
use crate::core::{Category, CategoryOracle, Difficulty};
use crate::game::{GameSession, Hint};
use anyhow::Result;
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// A front-end the controller talks to
///
/// Implementations own all input and output; the controller never touches a terminal
/// directly.
pub trait GameView {
    /// Called once before the first round
    fn initialize(&mut self) -> Result<()>;

    fn request_difficulty(&mut self) -> Result<Difficulty>;

    /// Ask for a category among `(category, label)` choices; `None` means any category
    fn request_category(&mut self, choices: &[(Category, String)]) -> Result<Option<Category>>;

    /// Read one line of player input; `None` when input is exhausted
    fn request_input(&mut self) -> Result<Option<String>>;

    fn display_state(&mut self, session: &GameSession<'_>) -> Result<()>;

    fn show_message(&mut self, message: &str) -> Result<()>;

    fn show_error(&mut self, message: &str) -> Result<()>;

    fn show_help(&mut self, difficulty: Difficulty) -> Result<()>;

    /// Summary of a finished round; `category_label` is the display name of its category
    fn show_final_result(&mut self, session: &GameSession<'_>, category_label: &str) -> Result<()>;

    fn ask_play_again(&mut self) -> Result<bool>;

    /// Called once after the last round
    fn cleanup(&mut self) -> Result<()>;
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
    /// The player quit or input ran out before the round finished
    Quit,
}

/// What a letter guess did, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessFeedback {
    Hit(char),
    Miss {
        letter: char,
        errors: u32,
        attempts_left: u32,
    },
    /// The letter was guessed before and missed
    AlreadyTried(char),
    /// The letter is already visible in the word
    AlreadyRevealed(char),
}

impl GuessFeedback {
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::Miss { .. })
    }
}

impl fmt::Display for GuessFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit(letter) => write!(f, "✓ Correct! The letter '{letter}' is in the word."),
            Self::Miss {
                letter,
                errors,
                attempts_left,
            } => write!(
                f,
                "✗ The letter '{letter}' is not in the word. Errors: {errors}, {attempts_left} attempts left."
            ),
            Self::AlreadyTried(letter) => {
                write!(f, "ℹ You already tried the letter '{letter}'.")
            }
            Self::AlreadyRevealed(letter) => {
                write!(f, "ℹ The letter '{letter}' is already revealed.")
            }
        }
    }
}

/// Apply a letter guess and describe its effect
pub fn apply_guess(session: &mut GameSession<'_>, letter: char) -> GuessFeedback {
    let letter = crate::core::normalize_letter(letter);
    if session.is_revealed(letter) {
        return GuessFeedback::AlreadyRevealed(letter);
    }
    if session.was_tried(letter) {
        return GuessFeedback::AlreadyTried(letter);
    }

    if session.guess(letter) {
        GuessFeedback::Hit(letter)
    } else {
        GuessFeedback::Miss {
            letter,
            errors: session.errors(),
            attempts_left: session.attempts_left(),
        }
    }
}

/// Render a hint for the player, using category display names
pub fn describe_hint<C: CategoryOracle + ?Sized>(hint: &Hint, categories: &C) -> String {
    match hint {
        Hint::Category(category) => format!("Category: {}", categories.display_name(category)),
        other => other.to_string(),
    }
}

/// Plays rounds against a catalog through a [`GameView`]
pub struct SessionController<'a, V, R, C: ?Sized> {
    catalog: &'a WordCatalog,
    categories: &'a C,
    view: V,
    rng: R,
}

impl<'a, V, R, C> SessionController<'a, V, R, C>
where
    V: GameView,
    R: Rng,
    C: CategoryOracle + ?Sized,
{
    pub const fn new(catalog: &'a WordCatalog, categories: &'a C, view: V, rng: R) -> Self {
        Self {
            catalog,
            categories,
            view,
            rng,
        }
    }

    /// Play rounds until the player declines another one
    ///
    /// # Errors
    ///
    /// Returns an error if the view fails to read input or write output.
    pub fn run(&mut self) -> Result<()> {
        self.view.initialize()?;
        let result = self.play_until_done();
        self.view.cleanup()?;
        result
    }

    fn play_until_done(&mut self) -> Result<()> {
        loop {
            let outcome = self.play_round()?;
            info!(?outcome, "round over");
            if outcome == RoundOutcome::Quit || !self.view.ask_play_again()? {
                return Ok(());
            }
        }
    }

    /// Play a single round
    ///
    /// # Errors
    ///
    /// Returns an error if the view fails to read input or write output.
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        let difficulty = self.view.request_difficulty()?;
        let choices: Vec<(Category, String)> = self
            .categories
            .categories()
            .into_iter()
            .map(|category| {
                let label = self.categories.display_name(&category);
                (category, label)
            })
            .collect();
        let category = self.view.request_category(&choices)?;

        let catalog = self.catalog;
        let target = match &category {
            Some(category) => catalog.select_random_in(category, &mut self.rng),
            None => catalog.select_random(&mut self.rng),
        };
        let mut session = GameSession::start(target, difficulty);

        self.view
            .show_message(&format!("Difficulty: {}", difficulty.display_name()))?;
        self.view
            .show_message(&format!("Attempts available: {}", difficulty.max_attempts()))?;
        self.view
            .show_message(&format!("Hints available: {}", difficulty.max_hints()))?;

        while !session.is_finished() {
            self.view.display_state(&session)?;

            let Some(input) = self.view.request_input()? else {
                debug!("input closed mid-round");
                return Ok(RoundOutcome::Quit);
            };
            if input.trim().is_empty() {
                self.view.show_error("Please enter a letter or a command.")?;
                continue;
            }

            match Command::parse(&input) {
                Some(Command::Guess(letter)) => {
                    let feedback = apply_guess(&mut session, letter);
                    if feedback.is_miss() && !session.is_finished() {
                        self.view.show_error(&feedback.to_string())?;
                    } else if !session.is_finished() {
                        self.view.show_message(&feedback.to_string())?;
                    }
                }
                Some(Command::HintCategory) => {
                    let hint = session.hint_category();
                    self.show_hint(&hint)?;
                }
                Some(Command::HintLetter) => {
                    let hint = session.hint_letter();
                    self.show_hint(&hint)?;
                }
                Some(Command::HintText) => {
                    let hint = session.hint_text();
                    self.show_hint(&hint)?;
                }
                Some(Command::Help) => self.view.show_help(difficulty)?,
                Some(Command::Quit) => {
                    self.view.show_message("Game ended by the player.")?;
                    return Ok(RoundOutcome::Quit);
                }
                None => self
                    .view
                    .show_error("Unknown command. Type HELP to see the available commands.")?,
            }
        }

        let label = self.categories.display_name(session.target().category());
        self.view.show_final_result(&session, &label)?;

        Ok(if session.is_won() {
            RoundOutcome::Won
        } else {
            RoundOutcome::Lost
        })
    }

    fn show_hint(&mut self, hint: &Hint) -> Result<()> {
        let text = describe_hint(hint, self.categories);
        self.view.show_message(&format!("💡 {text}"))
    }

    /// Give back the view, for inspecting what it recorded
    pub fn into_view(self) -> V {
        self.view
    }
}
