//! Formatting utilities for terminal output

use crate::core::Color;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Tree height as a bar against the red-black bound
#[must_use]
pub fn height_bar(height: usize, bound: f64, width: usize) -> String {
    create_progress_bar(height as f64, bound, width)
}

/// Short label for a node color
#[must_use]
pub const fn color_label(color: Option<Color>) -> &'static str {
    match color {
        Some(Color::Black) => "BLACK",
        Some(Color::Red) => "RED",
        None => "-",
    }
}
