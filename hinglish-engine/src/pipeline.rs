//! English to Hinglish pipeline: chunk, translate, transliterate

use crate::config::DEFAULT_PIPELINE_CHUNK_CHARS;
use crate::error::{EngineError, Result};
use crate::translator::Translator;
use hinglish_core::{Chunker, Scheme, Transliterator};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Outcome of translating one text, success or failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationOutcome {
    /// Translation succeeded
    Translated {
        /// Input text
        original: String,
        /// Romanized Hindi
        hinglish: String,
    },
    /// Translation failed
    Failed {
        /// Input text
        original: String,
        /// Why it failed
        reason: String,
    },
}

impl TranslationOutcome {
    /// True for [`TranslationOutcome::Translated`]
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationOutcome::Translated { .. })
    }

    /// The input text
    pub fn original(&self) -> &str {
        match self {
            TranslationOutcome::Translated { original, .. }
            | TranslationOutcome::Failed { original, .. } => original,
        }
    }

    /// The Hinglish text, if translation succeeded
    pub fn hinglish(&self) -> Option<&str> {
        match self {
            TranslationOutcome::Translated { hinglish, .. } => Some(hinglish),
            TranslationOutcome::Failed { .. } => None,
        }
    }

    /// The failure reason, if translation failed
    pub fn error(&self) -> Option<&str> {
        match self {
            TranslationOutcome::Translated { .. } => None,
            TranslationOutcome::Failed { reason, .. } => Some(reason),
        }
    }
}

/// Converts English text to Hinglish
///
/// Long text is chunked so every backend request stays under its limit. The
/// chunks are translated one after another to keep their order, then each
/// Devanagari result is transliterated and the pieces are joined with a space.
#[derive(Clone)]
pub struct HinglishPipeline {
    translator: Arc<dyn Translator>,
    transliterator: Transliterator,
    chunker: Chunker,
}

impl HinglishPipeline {
    /// Create a pipeline with the default scheme (ITRANS) and chunk size
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        let chunk_chars = DEFAULT_PIPELINE_CHUNK_CHARS.min(translator.max_input_chars()).max(1);
        Self {
            translator,
            transliterator: Transliterator::default(),
            chunker: Chunker::new(chunk_chars).unwrap_or_default(),
        }
    }

    /// Use `scheme` for transliteration
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.transliterator = Transliterator::new(scheme);
        self
    }

    /// Chunk long text into pieces of at most `chunk_chars` characters
    ///
    /// Fails when `chunk_chars` is 0 or above the translator's request limit.
    pub fn with_chunk_chars(mut self, chunk_chars: usize) -> Result<Self> {
        let limit = self.translator.max_input_chars();
        if chunk_chars > limit {
            return Err(EngineError::Config(format!(
                "chunk size {chunk_chars} exceeds the {} limit of {limit} characters",
                self.translator.name()
            )));
        }
        self.chunker = Chunker::new(chunk_chars)?;
        Ok(self)
    }

    /// The translation backend
    pub fn translator(&self) -> &Arc<dyn Translator> {
        &self.translator
    }

    /// Transliteration scheme
    pub fn scheme(&self) -> Scheme {
        self.transliterator.scheme()
    }

    /// Chunk size used for long text
    pub fn chunk_chars(&self) -> usize {
        self.chunker.max_chars()
    }

    /// Convert `text` to Hinglish
    pub async fn to_hinglish(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let chunks = self.chunker.chunk(text);
        let total = chunks.len();
        let mut pieces = Vec::with_capacity(total);

        for (i, chunk) in chunks.iter().enumerate() {
            debug!(
                "Translating chunk {}/{} ({} chars) with {}",
                i + 1,
                total,
                chunk.char_len(),
                self.translator.name()
            );
            let hindi = self.translator.translate(&chunk.text).await?;
            let roman = self.transliterator.transliterate(&hindi);
            let roman = roman.trim();
            if !roman.is_empty() {
                pieces.push(roman.to_string());
            }
        }

        Ok(pieces.join(" "))
    }

    /// Convert `text` to Hinglish, reporting failure as a value
    pub async fn outcome(&self, text: &str) -> TranslationOutcome {
        match self.to_hinglish(text).await {
            Ok(hinglish) => TranslationOutcome::Translated {
                original: text.to_string(),
                hinglish,
            },
            Err(e) => TranslationOutcome::Failed {
                original: text.to_string(),
                reason: e.to_string(),
            },
        }
    }
}

impl fmt::Debug for HinglishPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HinglishPipeline")
            .field("translator", &self.translator.name())
            .field("scheme", &self.scheme())
            .field("chunk_chars", &self.chunk_chars())
            .finish()
    }
}
