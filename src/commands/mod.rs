//! Command implementations
//!
//! The caller side of the game: input parsing, the round controller and its console
//! front-end.

pub mod command;
pub mod console;
pub mod controller;

pub use command::Command;
pub use console::ConsoleView;
pub use controller::{
    GameView, GuessFeedback, RoundOutcome, SessionController, apply_guess, describe_hint,
};
