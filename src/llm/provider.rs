use async_trait::async_trait;

use super::types::{ModelRequest, ModelResponse};
use crate::error::ProviderError;

/// A model backend capable of answering a single grounded request.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logs and diagnostics (e.g. "gemini").
    fn name(&self) -> &str;

    /// Check whether the endpoint is reachable.
    async fn health_check(&self) -> Result<bool, ProviderError>;

    /// Execute one generateContent call. Transport and decoding failures are
    /// transient `ProviderError`s; a well-formed reply with no usable text
    /// surfaces as `ModelResponse { answer_text: None }`.
    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, ProviderError>;
}
