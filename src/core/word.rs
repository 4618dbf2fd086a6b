//! Word record representation
//!
//! A `WordRecord` is one playable entry of the catalog: the hidden word, the category it
//! belongs to and a descriptive clue.

use super::{Category, CategoryOracle};
use derive_more::{Display, Error};

/// An immutable catalog entry
///
/// The word and category are stored trimmed and uppercased, the clue trimmed. All three
/// are guaranteed non-empty and the category belongs to the allow-list it was checked
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    word: String,
    category: Category,
    clue: String,
}

/// Reason a candidate record was rejected
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RecordError {
    #[display("empty word")]
    EmptyWord,
    #[display("empty category for word '{word}'")]
    EmptyCategory { word: String },
    #[display("empty clue for word '{word}'")]
    EmptyClue { word: String },
    #[display("unknown category '{category}' for word '{word}'")]
    UnknownCategory { word: String, category: String },
    #[display("word '{word}' contains '{character}', which cannot be guessed")]
    UnguessableCharacter { word: String, character: char },
}

/// Uppercase a single letter
///
/// Letters whose uppercase form is more than one character (such as `ß`) are returned
/// unchanged so that a guess always stays a single position-sized character.
#[must_use]
pub fn normalize_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

impl WordRecord {
    /// Validate and normalize a raw record
    ///
    /// # Errors
    /// Returns `RecordError` if any field is empty after trimming, the word holds a
    /// character other than letters and spaces, or the category is not part of
    /// `categories`.
    ///
    /// # Examples
    /// ```
    /// use ahorcado::core::{CategoryConfig, WordRecord};
    ///
    /// let categories = CategoryConfig::default();
    /// let record = WordRecord::new(" gato ", "animales", "Mascota felina", &categories).unwrap();
    /// assert_eq!(record.word(), "GATO");
    /// assert_eq!(record.category().id(), "ANIMALES");
    ///
    /// assert!(WordRecord::new("gato", "PLANETAS", "Mascota", &categories).is_err());
    /// ```
    pub fn new<C: CategoryOracle + ?Sized>(
        word: &str,
        category: &str,
        clue: &str,
        categories: &C,
    ) -> Result<Self, RecordError> {
        let word: String = word.trim().chars().map(normalize_letter).collect();
        if word.is_empty() {
            return Err(RecordError::EmptyWord);
        }
        // Only letters can be guessed; spaces start revealed
        if let Some(character) = word.chars().find(|&c| !c.is_alphabetic() && c != ' ') {
            return Err(RecordError::UnguessableCharacter { word, character });
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(RecordError::EmptyCategory { word });
        }

        let clue = clue.trim();
        if clue.is_empty() {
            return Err(RecordError::EmptyClue { word });
        }

        let category = Category::new(category);
        if !categories.is_valid(&category) {
            return Err(RecordError::UnknownCategory {
                word,
                category: category.id().to_string(),
            });
        }

        Ok(Self {
            word,
            category,
            clue: clue.to_string(),
        })
    }

    /// The hidden word, uppercased
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// The descriptive clue handed out by the text hint
    #[inline]
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Iterate the characters of the word in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.word.chars()
    }
}
