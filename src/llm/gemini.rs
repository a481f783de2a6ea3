//! HTTP provider for a Gemini-style generateContent endpoint.

use async_trait::async_trait;
use reqwest::Client;

use super::provider::LlmProvider;
use super::types::{GenerateRequest, GenerateResponse, ModelRequest, ModelResponse};
use crate::config::EndpointConfig;
use crate::error::ProviderError;

#[derive(Debug, Clone)]
pub struct GeminiProvider {
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            client: Client::new(),
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn health_check(&self) -> Result<bool, ProviderError> {
        let url = format!("{}/v1beta/models", self.base_url);
        let res = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await;
        match res {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(_) => Ok(false),
        }
    }

    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, ProviderError> {
        let body = GenerateRequest::from_model_request(request);

        let res = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::network)?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateResponse = res.json().await.map_err(ProviderError::malformed)?;
        Ok(ModelResponse {
            answer_text: payload.answer_text(),
        })
    }
}
