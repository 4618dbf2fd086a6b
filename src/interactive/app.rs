//! TUI application state and logic

use crate::catalog::WordCatalog;
use crate::commands::{Command, apply_guess, describe_hint};
use crate::core::{Category, CategoryConfig, CategoryOracle, Difficulty};
use crate::game::{GameSession, Hint};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Application state
pub struct App<'a> {
    pub catalog: &'a WordCatalog,
    pub categories: &'a CategoryConfig,
    pub difficulty: Difficulty,
    pub category: Option<Category>,
    pub session: GameSession<'a>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Rounds played during this run; nothing is persisted
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    /// Create the app and start its first round
    #[must_use]
    pub fn new(
        catalog: &'a WordCatalog,
        categories: &'a CategoryConfig,
        difficulty: Difficulty,
        category: Option<Category>,
        mut rng: StdRng,
    ) -> Self {
        let session = Self::start_session(catalog, difficulty, category.as_ref(), &mut rng);

        let mut app = Self {
            catalog,
            categories,
            difficulty,
            category,
            session,
            input_mode: InputMode::Playing,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!(
                "Welcome! {} difficulty: {} attempts, {} hints.",
                difficulty.display_name(),
                difficulty.max_attempts(),
                difficulty.max_hints()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Type a letter to guess. 1: category, 2: letter, 3: clue.",
            MessageStyle::Info,
        );
        app
    }

    fn start_session(
        catalog: &'a WordCatalog,
        difficulty: Difficulty,
        category: Option<&Category>,
        rng: &mut StdRng,
    ) -> GameSession<'a> {
        let target = match category {
            Some(category) => catalog.select_random_in(category, rng),
            None => catalog.select_random(rng),
        };
        GameSession::start(target, difficulty)
    }

    pub fn new_game(&mut self) {
        self.session = Self::start_session(
            self.catalog,
            self.difficulty,
            self.category.as_ref(),
            &mut self.rng,
        );
        self.messages.clear();
        self.input_mode = InputMode::Playing;
        self.add_message("New game started! Good luck.", MessageStyle::Info);
    }

    /// Apply one parsed player command to the running round
    pub fn handle_command(&mut self, command: Command) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        match command {
            Command::Guess(letter) => {
                let feedback = apply_guess(&mut self.session, letter);
                let style = if feedback.is_miss() {
                    MessageStyle::Error
                } else {
                    MessageStyle::Info
                };
                self.add_message(&feedback.to_string(), style);
            }
            Command::HintCategory => {
                let hint = self.session.hint_category();
                self.report_hint(&hint);
            }
            Command::HintLetter => {
                let hint = self.session.hint_letter();
                self.report_hint(&hint);
            }
            Command::HintText => {
                let hint = self.session.hint_text();
                self.report_hint(&hint);
            }
            Command::Help => self.add_message(
                "Letters guess. 1: category, 2: first hidden letter, 3: clue. Each hint once.",
                MessageStyle::Info,
            ),
            Command::Quit => self.should_quit = true,
        }

        if self.session.is_finished() {
            self.finish_round();
        }
    }

    fn report_hint(&mut self, hint: &Hint) {
        let style = if hint.is_granted() {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        let text = describe_hint(hint, self.categories);
        self.add_message(&format!("💡 {text}"), style);
    }

    fn finish_round(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::RoundOver;

        let word = self.session.target().word();
        if self.session.is_won() {
            self.stats.games_won += 1;
            self.add_message(
                &format!("🎉 You won! The word was {word}."),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("💀 No attempts left. The word was {word}."),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        info!(won = self.session.is_won(), errors = self.session.errors(), "round over");
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Display name of the hidden word's category, shown once the round is over
    #[must_use]
    pub fn category_label(&self) -> String {
        self.categories
            .display_name(self.session.target().category())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Esc) | (InputMode::RoundOver, KeyCode::Char('q')) => {
                    app.should_quit = true;
                }
                (InputMode::RoundOver, KeyCode::Char('n')) => app.new_game(),
                (InputMode::Playing, KeyCode::Char(c)) => {
                    if let Some(command) = Command::parse(&c.to_string()) {
                        app.handle_command(command);
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawRecord;
    use rand::SeedableRng;

    fn catalog() -> WordCatalog {
        WordCatalog::new(
            vec![RawRecord::new("sol", "OBJETOS", "Brilla en el cielo")],
            &CategoryConfig::default(),
        )
        .unwrap()
    }

    fn app<'a>(catalog: &'a WordCatalog, categories: &'a CategoryConfig) -> App<'a> {
        App::new(
            catalog,
            categories,
            Difficulty::Hard,
            None,
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn winning_round_updates_stats() {
        let catalog = catalog();
        let categories = CategoryConfig::default();
        let mut app = app(&catalog, &categories);

        for letter in ['s', 'o', 'l'] {
            app.handle_command(Command::Guess(letter));
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn losing_round_counts_game() {
        let catalog = catalog();
        let categories = CategoryConfig::default();
        let mut app = app(&catalog, &categories);

        for letter in ['a', 'b', 'c', 'd', 'e'] {
            app.handle_command(Command::Guess(letter));
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn commands_ignored_after_round() {
        let catalog = catalog();
        let categories = CategoryConfig::default();
        let mut app = app(&catalog, &categories);
        for letter in ['s', 'o', 'l'] {
            app.handle_command(Command::Guess(letter));
        }

        app.handle_command(Command::Guess('x'));
        assert_eq!(app.session.errors(), 0);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn new_game_resets_session() {
        let catalog = catalog();
        let categories = CategoryConfig::default();
        let mut app = app(&catalog, &categories);
        app.handle_command(Command::Guess('x'));
        app.handle_command(Command::HintText);

        app.new_game();
        assert_eq!(app.session.errors(), 0);
        assert_eq!(app.session.hints_used(), 0);
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn category_hint_uses_label() {
        let catalog = catalog();
        let categories = CategoryConfig::default();
        let mut app = app(&catalog, &categories);

        app.handle_command(Command::HintCategory);
        let last = app.messages.last().unwrap();
        assert!(last.text.contains("Category: Objetos"));
        assert_eq!(app.category_label(), "Objetos");
    }

    #[test]
    fn message_log_is_bounded() {
        let catalog = catalog();
        let categories = CategoryConfig::default();
        let mut app = app(&catalog, &categories);
        for _ in 0..10 {
            app.add_message("info", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 6);
    }
}
