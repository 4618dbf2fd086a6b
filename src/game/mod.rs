//! Game session state machine
//!
//! A [`GameSession`] is one play-through against a single catalog word. Guesses and hint
//! requests never fail; ordinary refusals come back as plain return values.

mod hint;
mod session;

pub use hint::Hint;
pub use session::{GameSession, PLACEHOLDER, Status};
