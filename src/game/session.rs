//! A single hangman play-through
//!
//! The session keeps counters only. Whether it is won, lost or still running is computed
//! from those counters on every query.

use super::Hint;
use crate::core::{Difficulty, WordRecord, normalize_letter};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Character shown for a position that has not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Derived state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// State of one game against a catalog word
///
/// Created with [`GameSession::start`]; a new game means a new session.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    target: &'a WordRecord,
    difficulty: Difficulty,
    target_chars: Vec<char>,
    revealed: Vec<Option<char>>,
    tried: FxHashSet<char>,
    errors: u32,
    hints_used: u32,
    used_category_hint: bool,
    used_letter_hint: bool,
    used_text_hint: bool,
}

impl<'a> GameSession<'a> {
    /// Start a session for `target` with the budgets of `difficulty`
    ///
    /// Every position is hidden except literal spaces.
    ///
    /// # Examples
    /// ```
    /// use ahorcado::core::{CategoryConfig, Difficulty, WordRecord};
    /// use ahorcado::game::GameSession;
    ///
    /// let record = WordRecord::new("gato", "ANIMALES", "Mascota felina", &CategoryConfig::default()).unwrap();
    /// let mut session = GameSession::start(&record, Difficulty::Medium);
    /// assert_eq!(session.masked_word(), "____");
    ///
    /// assert!(session.guess('g'));
    /// assert_eq!(session.masked_word(), "G___");
    /// ```
    #[must_use]
    pub fn start(target: &'a WordRecord, difficulty: Difficulty) -> Self {
        let target_chars: Vec<char> = target.chars().collect();
        let revealed = target_chars
            .iter()
            .map(|&c| (c == ' ').then_some(c))
            .collect();

        debug!(
            category = %target.category(),
            length = target_chars.len(),
            %difficulty,
            "session started"
        );

        Self {
            target,
            difficulty,
            target_chars,
            revealed,
            tried: FxHashSet::default(),
            errors: 0,
            hints_used: 0,
            used_category_hint: false,
            used_letter_hint: false,
            used_text_hint: false,
        }
    }

    /// Guess a letter, case-insensitively
    ///
    /// Reveals every position holding the letter and returns whether there was at least
    /// one. A letter that matches nothing costs one attempt. Returns `false` without
    /// changing anything if the session is finished or the letter was already tried.
    pub fn guess(&mut self, letter: char) -> bool {
        let letter = normalize_letter(letter);
        if self.is_finished() || !self.tried.insert(letter) {
            return false;
        }

        let mut hit = false;
        for (slot, &c) in self.revealed.iter_mut().zip(&self.target_chars) {
            if c == letter {
                *slot = Some(c);
                hit = true;
            }
        }

        if !hit {
            self.errors += 1;
        }
        trace!(%letter, hit, errors = self.errors, "guess");
        hit
    }

    /// Reveal the category of the hidden word
    pub fn hint_category(&mut self) -> Hint {
        if self.used_category_hint || !self.can_use_hint() {
            return Hint::Unavailable;
        }
        self.used_category_hint = true;
        self.hints_used += 1;
        Hint::Category(self.target.category().clone())
    }

    /// Reveal the first hidden letter in word order
    ///
    /// Despite being offered as a "random letter" hint, the leftmost hidden position is
    /// always chosen. All positions holding that letter are revealed, exactly as if it
    /// had been guessed.
    pub fn hint_letter(&mut self) -> Hint {
        if self.used_letter_hint || self.hints_used >= self.difficulty.max_hints() {
            return Hint::Unavailable;
        }

        let Some(index) = self.revealed.iter().position(Option::is_none) else {
            return Hint::AllRevealed;
        };
        if self.is_finished() {
            return Hint::Unavailable;
        }

        let letter = self.target_chars[index];
        self.guess(letter);
        self.used_letter_hint = true;
        self.hints_used += 1;
        Hint::Letter(letter)
    }

    /// Reveal the clue of the hidden word
    pub fn hint_text(&mut self) -> Hint {
        if self.used_text_hint || !self.can_use_hint() {
            return Hint::Unavailable;
        }
        self.used_text_hint = true;
        self.hints_used += 1;
        Hint::Clue(self.target.clue().to_string())
    }

    fn can_use_hint(&self) -> bool {
        !self.is_finished() && self.hints_used < self.difficulty.max_hints()
    }

    /// The word with hidden positions shown as [`PLACEHOLDER`]
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }

    /// Whether `letter` is currently visible in the word
    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        let letter = normalize_letter(letter);
        self.revealed.contains(&Some(letter))
    }

    /// Whether `letter` has already been submitted
    #[must_use]
    pub fn was_tried(&self, letter: char) -> bool {
        self.tried.contains(&normalize_letter(letter))
    }

    /// Letters submitted so far, sorted
    #[must_use]
    pub fn tried_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.tried.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.difficulty.max_attempts().saturating_sub(self.errors)
    }

    #[must_use]
    pub const fn errors(&self) -> u32 {
        self.errors
    }

    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub const fn hints_left(&self) -> u32 {
        self.difficulty.max_hints().saturating_sub(self.hints_used)
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The hidden record
    ///
    /// Front-ends normally only show it once the session is finished.
    #[must_use]
    pub const fn target(&self) -> &'a WordRecord {
        self.target
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.errors >= self.difficulty.max_attempts()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_won() {
            Status::Won
        } else if self.is_lost() {
            Status::Lost
        } else {
            Status::InProgress
        }
    }
}
