//! Whitespace token statistics.

use std::collections::HashSet;

use pricefeat_primitives::columns::UNKNOWN;

/// Number of whitespace-separated tokens.
#[must_use]
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Distinct tokens over total tokens.
///
/// Returns 0.0 for empty text, the `"unknown"` placeholder, or text with no
/// tokens.
#[must_use]
pub fn unique_token_ratio(text: &str) -> f64 {
    if text.is_empty() || text == UNKNOWN {
        return 0.0;
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let distinct: HashSet<&str> = tokens.iter().copied().collect();
    distinct.len() as f64 / tokens.len() as f64
}
