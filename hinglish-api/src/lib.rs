//! REST service for English to Hinglish translation
//!
//! - `GET /` and `GET /health` - health check
//! - `POST /translate` - translate `{"text": "..."}` to Hinglish
//!
//! Errors are returned as `{"detail": "..."}`. A failed translation is not an
//! HTTP error: it answers `200` with `success: false` and the reason in
//! `error`.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use hinglish_engine::HinglishPipeline;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub use config::{ServerConfig, DEFAULT_ADDR, DEFAULT_MAX_TEXT_CHARS};
pub use dto::{ErrorResponse, HealthResponse, TranslateRequest, TranslateResponse};
pub use error::{ApiError, Result};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pipeline: HinglishPipeline,
    max_text_chars: usize,
}

impl AppState {
    /// State serving `pipeline` with the default text limit
    pub fn new(pipeline: HinglishPipeline) -> Self {
        Self {
            pipeline,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }

    /// Override the per-request text limit
    pub fn with_max_text_chars(mut self, max_text_chars: usize) -> Self {
        self.max_text_chars = max_text_chars;
        self
    }

    /// The translation pipeline
    pub fn pipeline(&self) -> &HinglishPipeline {
        &self.pipeline
    }
}

/// Root endpoint
async fn root() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        "English to Hinglish Translator API is running",
    ))
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        "Service is running and ready to translate",
    ))
}

/// Translate English text to Hinglish
async fn translate(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>> {
    let Json(request) = payload?;

    if request.text.is_empty() {
        return Err(ApiError::Unprocessable(
            "Text must be at least 1 character".to_string(),
        ));
    }
    if request.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
    }

    let chars = request.text.chars().count();
    if chars > state.max_text_chars {
        return Err(ApiError::Unprocessable(format!(
            "Text must be at most {} characters, got {chars}",
            state.max_text_chars
        )));
    }

    info!("POST /translate - {} chars", chars);

    let outcome = state.pipeline.outcome(&request.text).await;
    if let Some(reason) = outcome.error() {
        tracing::warn!("Translation failed: {}", reason);
    }

    Ok(Json(TranslateResponse::from(outcome)))
}

/// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/translate", post(translate))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Run the server
pub async fn run(addr: &str, state: AppState) -> Result<()> {
    let app = create_router(state);

    info!("Starting Hinglish translator API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
