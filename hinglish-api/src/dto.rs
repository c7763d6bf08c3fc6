//! Request and response bodies

use hinglish_engine::TranslationOutcome;
use serde::{Deserialize, Serialize};

/// `POST /translate` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// English text to translate
    pub text: String,
}

/// `POST /translate` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Text as submitted
    pub original_text: String,
    /// Hinglish translation, empty on failure
    pub hinglish_text: String,
    /// Whether translation succeeded
    pub success: bool,
    /// Failure message
    pub error: Option<String>,
}

impl From<TranslationOutcome> for TranslateResponse {
    fn from(outcome: TranslationOutcome) -> Self {
        match outcome {
            TranslationOutcome::Translated { original, hinglish } => Self {
                original_text: original,
                hinglish_text: hinglish,
                success: true,
                error: None,
            },
            TranslationOutcome::Failed { original, reason } => Self {
                original_text: original,
                hinglish_text: String::new(),
                success: false,
                error: Some(format!("Translation error: {reason}")),
            },
        }
    }
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the service answers
    pub status: String,
    /// Service version
    pub version: String,
    /// Human readable message
    pub message: String,
}

impl HealthResponse {
    /// Healthy response carrying `message`
    pub fn healthy(message: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            message: message.into(),
        }
    }
}

/// Error body, `{"detail": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// What went wrong
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_from_success() {
        let response = TranslateResponse::from(TranslationOutcome::Translated {
            original: "hello".into(),
            hinglish: "namaste".into(),
        });
        assert!(response.success);
        assert_eq!(response.hinglish_text, "namaste");
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_response_from_failure() {
        let response = TranslateResponse::from(TranslationOutcome::Failed {
            original: "hello".into(),
            reason: "timeout".into(),
        });
        assert!(!response.success);
        assert_eq!(response.original_text, "hello");
        assert_eq!(response.hinglish_text, "");
        assert_eq!(response.error.as_deref(), Some("Translation error: timeout"));
    }

    #[test]
    fn test_success_serializes_null_error() {
        let response = TranslateResponse {
            original_text: "a".into(),
            hinglish_text: "b".into(),
            success: true,
            error: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["error"].is_null());
    }
}
