//! Core domain types for the hangman game
//!
//! This module contains the immutable value types the game is built from: word records,
//! categories and their allow-list, and difficulty tiers. None of them perform I/O.

mod category;
mod difficulty;
mod word;

pub use category::{Category, CategoryConfig, CategoryConfigError, CategoryOracle};
pub use difficulty::Difficulty;
pub use word::{RecordError, WordRecord, normalize_letter};
