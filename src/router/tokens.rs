// ABOUTME: Cheap token estimation and budget-enforcing truncation for prompt text
// ABOUTME: Chars-per-token heuristic, deliberately not a real tokenizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness

use crate::constants::tokens::CHARS_PER_TOKEN;

/// Estimate the token cost of a piece of prompt text
///
/// Uses the average-characters-per-token heuristic. This is a cost-control
/// approximation, not a tokenizer; budgets are soft caps and the estimate
/// only needs to be consistent, not exact.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(CHARS_PER_TOKEN)
}

/// Truncate text so its estimated token count fits a budget
///
/// Prefers cutting at a line boundary so a truncated exercise list ends on
/// a whole line; falls back to the nearest char boundary when the text has
/// no usable newline in the window.
#[must_use]
pub fn truncate_to_tokens(text: &str, max_tokens: usize) -> String {
    if estimate_tokens(text) <= max_tokens {
        return text.to_owned();
    }

    let max_chars = max_tokens * CHARS_PER_TOKEN;
    let mut cut = max_chars.min(text.len());
    while cut > 0 && !text.is_char_boundary(cut) {
        cut -= 1;
    }
    let window = &text[..cut];

    // Only honor a newline cut when it keeps a meaningful amount of text
    window.rfind('\n').filter(|pos| *pos >= max_chars / 2).map_or_else(
        || window.to_owned(),
        |pos| window[..pos].to_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abc"), 1);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
    }

    #[test]
    fn test_truncate_noop_within_budget() {
        let text = "short text";
        assert_eq!(truncate_to_tokens(text, 100), text);
    }

    #[test]
    fn test_truncate_enforces_budget() {
        let text = "x".repeat(1000);
        let truncated = truncate_to_tokens(&text, 50);
        assert!(estimate_tokens(&truncated) <= 50);
        assert_eq!(truncated.len(), 200);
    }

    #[test]
    fn test_truncate_prefers_line_boundary() {
        let mut text = String::new();
        for i in 0..100 {
            text.push_str(&format!("- exercise line number {i}\n"));
        }
        let truncated = truncate_to_tokens(&text, 50);
        assert!(estimate_tokens(&truncated) <= 50);
        assert!(truncated.ends_with(|c: char| c != '\n'));
        assert!(truncated.lines().last().is_some_and(|l| l.starts_with("- ")));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "héllo wörld ".repeat(100);
        let truncated = truncate_to_tokens(&text, 10);
        assert!(estimate_tokens(&truncated) <= 10);
    }
}
