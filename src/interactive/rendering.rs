//! TUI rendering with ratatui
//!
//! Layout and widgets for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{hint_slots, spaced_word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word and letters
            Constraint::Percentage(40), // Budgets and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Word
            Constraint::Percentage(40), // Tried letters
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_tried(f, app, chunks[1]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let (word, color) = match app.input_mode {
        InputMode::Playing => (session.masked_word(), Color::Yellow),
        InputMode::RoundOver if session.is_won() => {
            (session.target().word().to_string(), Color::Green)
        }
        InputMode::RoundOver => (session.target().word().to_string(), Color::Red),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_word(&word),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} letters", word.chars().filter(|c| *c != ' ').count())),
    ];
    if app.input_mode == InputMode::RoundOver {
        content.push(Line::from(format!("Category: {}", app.category_label())));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_tried(f: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = app
        .session
        .tried_letters()
        .into_iter()
        .map(|letter| {
            let style = if app.session.is_revealed(letter) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Span::styled(format!("{letter} "), style)
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(" Tried Letters ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(3), // Hints
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_hints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let max = app.session.difficulty().max_attempts();
    let left = app.session.attempts_left();
    let ratio = if max == 0 {
        0.0
    } else {
        f64::from(left) / f64::from(max)
    };
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{left}/{max} left | {} errors", app.session.errors()));

    f.render_widget(gauge, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let max = app.session.difficulty().max_hints();
    let used = app.session.hints_used();

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(hint_slots(used, max), Style::default().fg(Color::Yellow)),
        Span::raw(format!("  {used}/{max} used")),
    ]))
    .block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Playing => (
            " Type a letter to guess | 1: Category  2: Letter  3: Clue  4: Help ",
            Color::Yellow,
        ),
        InputMode::RoundOver if app.session.is_won() => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        InputMode::RoundOver => (
            " Out of attempts | Press 'n' for new game or 'q' to quit ",
            Color::Red,
        ),
    };

    let input = Paragraph::new("")
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = format!("Difficulty: {}", app.difficulty.display_name());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let category_text = match &app.category {
        Some(category) => format!("Category: {category}"),
        None => "Category: any".to_string(),
    };
    let category = Paragraph::new(category_text).alignment(Alignment::Center);
    f.render_widget(category, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Playing => "Esc: Quit | Ctrl-C: Quit",
        InputMode::RoundOver => "q: Quit | n: New Game",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RawRecord, WordCatalog};
    use crate::commands::Command;
    use crate::core::{CategoryConfig, Difficulty};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_masked_word_while_playing() {
        let categories = CategoryConfig::default();
        let catalog = WordCatalog::new(
            vec![RawRecord::new("gato", "ANIMALES", "Mascota felina")],
            &categories,
        )
        .unwrap();
        let mut app = App::new(
            &catalog,
            &categories,
            Difficulty::Medium,
            None,
            StdRng::seed_from_u64(5),
        );
        app.handle_command(Command::Guess('g'));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("G _ _ _"));
        assert!(text.contains("Difficulty: Medium"));
        assert!(!text.contains("GATO"));
    }
}
