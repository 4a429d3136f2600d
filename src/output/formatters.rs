//! Formatting utilities for terminal output

use crate::core::Tile;

/// Tile as letter, value and bonus, e.g. `I1[5L]`
#[must_use]
pub fn format_tile(tile: &Tile) -> String {
    let mut text = format!("{}{}", tile.letter.to_uppercase(), tile.value);
    if let Some(bonus) = &tile.bonus {
        text.push_str(&format!("[{}]", bonus.to_uppercase()));
    }
    text
}

/// Tile indices as the comma-separated list the CLI accepts
#[must_use]
pub fn format_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width] before the cast
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentile (0-100) as a bar
#[must_use]
pub fn percentile_bar(percentile: f64, width: usize) -> String {
    create_progress_bar(percentile, 100.0, width)
}
