//! Ahorcado
//!
//! A hangman word-guessing game with difficulty tiers, one-shot hints and both a
//! full-screen and a line-based terminal front-end.
//!
//! # Quick Start
//!
//! ```rust
//! use ahorcado::catalog::{RawRecord, WordCatalog};
//! use ahorcado::core::{CategoryConfig, Difficulty};
//! use ahorcado::game::GameSession;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let categories = CategoryConfig::default();
//! let catalog = WordCatalog::new(
//!     vec![RawRecord::new("gato", "ANIMALES", "Mascota felina")],
//!     &categories,
//! )
//! .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = GameSession::start(catalog.select_random(&mut rng), Difficulty::Medium);
//! session.guess('g');
//! assert_eq!(session.masked_word(), "G___");
//! ```

// Core domain types
pub mod core;

// Word sources and selection
pub mod catalog;

// Game session rules
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
