//! Formatting utilities for terminal output

/// Put a space between the characters of a masked word
///
/// Literal spaces in the word are widened to three columns so word boundaries stay
/// visible.
#[must_use]
pub fn spaced_word(masked: &str) -> String {
    let mut result = String::with_capacity(masked.len() * 2);
    for (i, c) in masked.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        if c == ' ' {
            result.push_str("  ");
        } else {
            result.push(c);
        }
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) as usize * width) / max as usize
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One marker per hint slot, filled for hints already used
#[must_use]
pub fn hint_slots(used: u32, max: u32) -> String {
    (0..max)
        .map(|i| if i < used { '●' } else { '○' })
        .collect()
}
