//! Formatting utilities for terminal output

use crate::solver::entropy::MATCH_BUCKETS;

/// List the replies that lead somewhere, e.g. `"0 2 3 5"`
#[must_use]
pub fn format_links(links: &[bool; MATCH_BUCKETS]) -> String {
    links
        .iter()
        .enumerate()
        .filter(|&(_, &active)| active)
        .map(|(k, _)| k.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the six possible replies
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = (MATCH_BUCKETS as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
