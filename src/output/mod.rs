//! Terminal output formatting
//!
//! Display utilities for the console front-end.

pub mod display;
pub mod formatters;

pub use display::{
    write_banner, write_category_menu, write_difficulty_menu, write_final_result, write_help,
    write_menu, write_state,
};
