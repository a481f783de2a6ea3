//! Runtime configuration for the chat pipeline.

use std::env;

use crate::llm::invoker::RetryPolicy;

/// Default maximum characters per document segment.
pub const DEFAULT_CHUNK_SIZE: usize = 1500;

/// Settings for the whole pipeline: chunking, retries, and the model endpoint.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Maximum segment size in characters.
    pub chunk_size: usize,
    /// Retry behavior for model invocations.
    pub retry: RetryPolicy,
    /// Remote model endpoint settings.
    pub endpoint: EndpointConfig,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            retry: RetryPolicy::default(),
            endpoint: EndpointConfig::default(),
        }
    }
}

impl ChatConfig {
    /// Default settings with the endpoint credential taken from the
    /// environment.
    pub fn from_env() -> Self {
        Self {
            endpoint: EndpointConfig::from_env(),
            ..Self::default()
        }
    }
}

/// Connection settings for the generateContent endpoint.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub base_url: String,
    pub model: String,
    /// API credential, supplied out-of-band by the hosting environment.
    pub api_key: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: String::new(),
        }
    }
}

impl EndpointConfig {
    /// Read the credential from `GEMINI_API_KEY`, keeping defaults for the
    /// rest.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            ..Self::default()
        }
    }
}
