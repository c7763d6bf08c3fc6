//! Translation backends
//!
//! The [`Translator`] trait is the seam between the pipeline and whatever
//! service turns English into Hindi. [`GoogleTranslator`] is the production
//! backend; tests plug in their own implementations.

mod google;

pub use google::{parse_response, GoogleTranslator};

use crate::config::BACKEND_CHAR_LIMIT;
use crate::error::Result;

/// English to Hindi (Devanagari) translation backend
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text`, returning Devanagari
    ///
    /// Empty or whitespace-only input yields an empty string.
    async fn translate(&self, text: &str) -> Result<String>;

    /// Backend name for logs
    fn name(&self) -> &str {
        "translator"
    }

    /// Largest text accepted in one call, in characters
    fn max_input_chars(&self) -> usize {
        BACKEND_CHAR_LIMIT
    }
}
