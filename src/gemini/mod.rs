//! Model gateway: the seam between the pipeline and the text-generation
//! service.
//!
//! Everything above this module talks to `dyn ModelGateway`; the real
//! Gemini client lives in [`client`], tests script the trait directly.

pub mod client;

pub use client::GeminiClient;

use async_trait::async_trait;

/// Generation model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("response carried no generated text")]
    EmptyResponse,
}

/// One prompt in, one plain-text reply out. Exactly one attempt per
/// call: no retries, no client-side timeout, no streaming.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
