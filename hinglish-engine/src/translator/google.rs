//! Google Translate backend (`translate_a/single`, `client=gtx`)

use super::Translator;
use crate::config::{TranslatorConfig, BACKEND_CHAR_LIMIT};
use crate::error::{EngineError, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Translator backed by the public Google Translate endpoint
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    http: Client,
    config: TranslatorConfig,
}

impl GoogleTranslator {
    /// Build a translator from `config`
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for the translation backend");
        }

        let http = Client::builder()
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { http, config })
    }

    /// Configuration in use
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!(
            "{}/translate_a/single",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let chars = text.chars().count();
        if chars > BACKEND_CHAR_LIMIT {
            return Err(EngineError::InputTooLong {
                chars,
                limit: BACKEND_CHAR_LIMIT,
            });
        }

        debug!("Translating {} chars via {}", chars, self.config.endpoint);

        let response = self
            .http
            .get(self.url())
            .query(&[
                ("client", "gtx"),
                ("sl", self.config.source_lang.as_str()),
                ("tl", self.config.target_lang.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(EngineError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        parse_response(&body)
    }

    fn name(&self) -> &str {
        "google"
    }
}

/// Extract the translation from a `translate_a/single` response body
///
/// The body is a nested array whose first element lists the translated
/// segments; the first string of every segment is concatenated.
pub fn parse_response(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| EngineError::UnexpectedResponse("missing translation segments".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    Ok(translated)
}
