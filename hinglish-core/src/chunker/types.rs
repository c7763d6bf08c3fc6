//! Chunk and ChunkSet types

use super::CutKind;

/// A trimmed, bounded piece of a document
///
/// `start` and `end` are character offsets into the original document and
/// describe the span the chunk was cut from, including any whitespace that
/// trimming removed. `text` never exceeds the chunker's `max_chars`, although
/// the span can when it absorbs a whitespace-only gap that produced no chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// Chunk text with leading and trailing whitespace removed
    pub text: String,
    /// First character offset of the span (inclusive)
    pub start: usize,
    /// Last character offset of the span (exclusive)
    pub end: usize,
    /// How the end of the chunk was chosen
    pub cut: CutKind,
}

impl Chunk {
    pub(crate) fn new(text: String, start: usize, end: usize, cut: CutKind) -> Self {
        Self {
            text,
            start,
            end,
            cut,
        }
    }

    /// Length of the trimmed text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Length of the covered span in characters
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }
}

/// Ordered chunks produced by one chunking call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkSet {
    chunks: Vec<Chunk>,
    max_chars: usize,
}

impl ChunkSet {
    pub(crate) fn new(chunks: Vec<Chunk>, max_chars: usize) -> Self {
        Self { chunks, max_chars }
    }

    /// Number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True when the document produced no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The limit the set was produced with
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Get a chunk by index
    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Iterate over the chunks in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    /// Borrow the chunks as a slice
    pub fn as_slice(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunk texts in document order
    pub fn texts(&self) -> Vec<&str> {
        self.chunks.iter().map(|c| c.text.as_str()).collect()
    }

    /// Consume the set, keeping only the chunk texts
    pub fn into_texts(self) -> Vec<String> {
        self.chunks.into_iter().map(|c| c.text).collect()
    }

    /// Total characters across all chunk texts
    pub fn total_chars(&self) -> usize {
        self.chunks.iter().map(Chunk::char_len).sum()
    }

    /// Join the chunk texts with `separator`
    pub fn join(&self, separator: &str) -> String {
        self.texts().join(separator)
    }
}

impl IntoIterator for ChunkSet {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChunkSet {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
