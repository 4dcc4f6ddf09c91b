//! Simple statistics over generated text.

use serde::{Deserialize, Serialize};

/// Character, line and paragraph counts.
///
/// # Examples
///
/// ```
/// use daihon_core::TextStats;
///
/// let stats = TextStats::of("第一幕\n出会い\n\n第二幕\n\n\n");
/// assert_eq!(*stats.characters(), 15);
/// assert_eq!(*stats.lines(), 7);
/// assert_eq!(*stats.paragraphs(), 2);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TextStats {
    /// Unicode scalar values.
    characters: usize,
    /// Newlines plus one.
    lines: usize,
    /// Non-blank blocks separated by a blank line.
    paragraphs: usize,
}

impl TextStats {
    /// Computes statistics for a text.
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            lines: text.matches('\n').count() + 1,
            paragraphs: text
                .split("\n\n")
                .filter(|p| !p.trim().is_empty())
                .count(),
        }
    }
}
