//! Cut point search within a candidate window

use super::SEARCH_WINDOW;

/// Characters that end a sentence
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// How a chunk's end was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CutKind {
    /// Cut immediately after a sentence terminator
    Sentence,
    /// Cut immediately after a whitespace character
    Word,
    /// No boundary in the search window; cut at exactly `max_chars`
    Hard,
    /// The rest of the document fit into the chunk
    End,
}

/// Check whether `ch` is a sentence terminator
#[inline]
pub fn is_sentence_terminator(ch: char) -> bool {
    SENTENCE_TERMINATORS.contains(&ch)
}

/// Find the exclusive end of the chunk starting at `pos`
///
/// The caller guarantees that more than `max_chars` characters remain after
/// `pos`. The returned cut is always in `pos + 1 ..= pos + max_chars`.
pub(crate) fn find_cut(chars: &[char], pos: usize, max_chars: usize) -> (usize, CutKind) {
    let window_end = pos + max_chars;
    let search_start = window_end - max_chars.min(SEARCH_WINDOW);
    let window = &chars[search_start..window_end];

    if let Some(i) = window.iter().rposition(|&c| is_sentence_terminator(c)) {
        return (search_start + i + 1, CutKind::Sentence);
    }

    if let Some(i) = window.iter().rposition(|c| c.is_whitespace()) {
        return (search_start + i + 1, CutKind::Word);
    }

    (window_end, CutKind::Hard)
}
