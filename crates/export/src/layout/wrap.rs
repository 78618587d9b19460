//! Greedy word-wrap against a metric-measured width.
//!
//! Same greedy algorithm as the line-count estimator the wrap counts are
//! derived from: words are appended to the current line while they fit, and
//! a word that does not fit starts a new line. A single word wider than the
//! line gets a line of its own rather than being split mid-word.

use super::metrics::{space_width_mm, text_width_mm, FontStyle};

/// Wraps `text` into lines no wider than `max_width_mm` at `size_pt`.
///
/// Empty or whitespace-only input yields no lines.
pub fn wrap_to_width(text: &str, style: FontStyle, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let space_w = space_width_mm(style, size_pt);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in words {
        let word_w = text_width_mm(word, style, size_pt);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_w;
        } else if current_width + space_w + word_w > max_width_mm {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_width += space_w + word_w;
        }
    }
    lines.push(current);
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
