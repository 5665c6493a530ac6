//! # Text Generation
//!
//! The external capability used to suggest natural-language test cases.
//! Callers own the fallback policy; implementations only report failure.

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

use crate::http::client::HttpError;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Text generation is disabled")]
    Disabled,

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Generation API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("Generation response contained no text")]
    EmptyResponse,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Generator that always fails, forcing the deterministic fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    async fn generate_text(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }
}
