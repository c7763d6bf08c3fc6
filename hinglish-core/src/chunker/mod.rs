//! Boundary-aware text chunking
//!
//! Splits a document into chunks of at most `max_chars` characters using
//! greedy forward segmentation. For every chunk the trailing part of the
//! candidate window is searched for a cut point, in order of preference:
//!
//! 1. the rightmost sentence terminator (`.`, `!`, `?`), cut after it
//! 2. the rightmost whitespace character, cut after it
//! 3. a hard cut at exactly `max_chars`
//!
//! Every chunk is trimmed of leading and trailing whitespace and chunks that
//! trim to nothing are dropped. Concatenating the chunks therefore preserves
//! all non-whitespace content in order, but not the whitespace at cut points.
//!
//! All lengths and offsets are counted in characters (Unicode scalar values),
//! so Devanagari and other multi-byte text is never cut inside a code point.

mod boundary;
mod types;


use crate::error::{CoreError, Result};
use boundary::find_cut;

pub use boundary::{is_sentence_terminator, CutKind, SENTENCE_TERMINATORS};
pub use types::{Chunk, ChunkSet};

/// Number of trailing characters of each candidate window searched for a boundary
pub const SEARCH_WINDOW: usize = 200;

/// Default maximum chunk length used by the file splitter
pub const DEFAULT_MAX_CHARS: usize = 2000;

/// Splits documents into bounded, boundary-aligned chunks
///
/// A `Chunker` is immutable and holds no per-call state, so one instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    max_chars: usize,
}

impl Chunker {
    /// Create a chunker producing chunks of at most `max_chars` characters
    ///
    /// Fails with [`CoreError::InvalidConfiguration`] when `max_chars` is 0.
    pub fn new(max_chars: usize) -> Result<Self> {
        if max_chars == 0 {
            return Err(CoreError::invalid("max_chars must be at least 1, got 0"));
        }
        Ok(Self { max_chars })
    }

    /// Maximum chunk length in characters
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Split `text` into a [`ChunkSet`]
    pub fn chunk(&self, text: &str) -> ChunkSet {
        let chars: Vec<char> = text.chars().collect();
        let char_count = chars.len();

        // byte_at[i] is the byte offset of character i; byte_at[n] == text.len()
        let mut byte_at: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        byte_at.push(text.len());

        let mut chunks = Vec::new();
        let mut pos = 0;
        let mut span_start = 0;

        while pos < char_count {
            let (cut, kind) = if char_count - pos <= self.max_chars {
                (char_count, CutKind::End)
            } else {
                find_cut(&chars, pos, self.max_chars)
            };

            let trimmed = text[byte_at[pos]..byte_at[cut]].trim();
            if !trimmed.is_empty() {
                chunks.push(Chunk::new(trimmed.to_string(), span_start, cut, kind));
                span_start = cut;
            }

            pos = cut;
        }

        // A skipped whitespace-only tail still belongs to the last chunk's span
        if let Some(last) = chunks.last_mut() {
            last.end = char_count;
        }

        ChunkSet::new(chunks, self.max_chars)
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// Split `text` into trimmed chunks of at most `max_chars` characters
///
/// Returns an empty vector for empty (or whitespace-only) text. Fails with
/// [`CoreError::InvalidConfiguration`] when `max_chars` is 0.
pub fn split(text: &str, max_chars: usize) -> Result<Vec<String>> {
    Ok(Chunker::new(max_chars)?.chunk(text).into_texts())
}

/// Convert a signed chunk size (CLI flag, config value) into a valid `max_chars`
pub fn validate_max_chars(value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(CoreError::invalid(format!(
            "max_chars must be at least 1, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| CoreError::invalid(format!("max_chars {value} does not fit in usize")))
}
