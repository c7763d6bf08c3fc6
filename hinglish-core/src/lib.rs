//! Core text processing for the Hinglish toolkit
//!
//! This crate holds the pure, I/O-free parts of the pipeline:
//!
//! - **Chunking**: greedy forward segmentation of a document into chunks of at
//!   most `max_chars` characters, preferring sentence boundaries, then word
//!   boundaries, then a hard cut.
//! - **Transliteration**: deterministic Devanagari to Roman conversion
//!   (ITRANS or IAST).
//!
//! # Example
//!
//! ```rust
//! use hinglish_core::{split, transliterate, Scheme};
//!
//! let chunks = split("Hello world. This is a test.", 16).unwrap();
//! assert_eq!(chunks, vec!["Hello world.", "This is a test."]);
//!
//! assert_eq!(transliterate("नमस्ते", Scheme::Itrans), "namaste");
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod error;
pub mod transliteration;

pub use chunker::{
    split, validate_max_chars, Chunk, ChunkSet, Chunker, CutKind, DEFAULT_MAX_CHARS,
    SEARCH_WINDOW, SENTENCE_TERMINATORS,
};
pub use error::{CoreError, Result};
pub use transliteration::{transliterate, Scheme, Transliterator};
