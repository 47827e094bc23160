//! Formatting utilities for terminal output

use crate::core::{BLACK_PEG, Response, WHITE_PEG};

/// Format a response as a peg row: `●` black, `○` white, `·` empty
#[must_use]
pub fn pegs_to_string(response: Response, len: usize) -> String {
    response
        .to_pegs(len)
        .into_iter()
        .map(|peg| match peg {
            BLACK_PEG => '●',
            WHITE_PEG => '○',
            _ => '·',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
