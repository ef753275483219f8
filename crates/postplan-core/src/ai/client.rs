//! Chat-completions API client
//!
//! A thin reqwest wrapper around the OpenAI-format chat-completions call.
//! One endpoint, one non-streaming operation; no retry policy.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use super::providers::ProviderConfig;
use crate::constants;

/// Errors from a chat-completion call
#[derive(Debug, Error)]
pub enum AiError {
    /// Network or protocol failure before a response body was read
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the provider
    #[error("api error: {status} - {message}")]
    Api { status: StatusCode, message: String },

    /// The provider answered 200 but the completion carried no text
    #[error("empty completion from model")]
    EmptyCompletion,
}

/// AI API client for a single OpenAI-compatible provider
pub struct AiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl AiClient {
    fn create_http_client() -> Client {
        Client::builder()
            .user_agent("postplan/0.1")
            .connect_timeout(constants::http::CONNECT_TIMEOUT)
            .timeout(constants::http::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client: {}. Using default client.", e);
                Client::new()
            })
    }

    /// Create a new client for a provider with an API key
    pub fn new(provider: &ProviderConfig, api_key: String) -> Self {
        Self {
            http: Self::create_http_client(),
            base_url: provider.base_url.clone(),
            api_key,
        }
    }

    /// Build a request with bearer authentication
    fn build_request(&self) -> reqwest::RequestBuilder {
        self.http
            .post(&self.base_url)
            .header("authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
    }

    /// Make a simple non-streaming chat-completion call
    ///
    /// Posts the two-message system+user prompt and returns the text of the
    /// first choice. A failure becomes a typed [`AiError`]; callers decide
    /// what to show the user.
    pub async fn call_simple(
        &self,
        model: &str,
        system_prompt: &str,
        user_message: &str,
        max_tokens: usize,
    ) -> Result<String, AiError> {
        let body = serde_json::json!({
            "model": model,
            "max_tokens": max_tokens,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_message}
            ]
        });

        debug!("Chat-completion call to model: {}", model);

        let response = self.build_request().json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("API error response: {} - {}", status, message);
            return Err(AiError::Api { status, message });
        }

        let json: Value = response.json().await?;

        // Extract text from OpenAI response format
        let text = json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|msg| msg.get("content"))
            .and_then(|t| t.as_str())
            .unwrap_or("")
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(AiError::EmptyCompletion);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_status_and_body() {
        let err = AiError::Api {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "quota exceeded".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("quota exceeded"));
    }

    #[test]
    fn test_empty_completion_display() {
        assert_eq!(
            AiError::EmptyCompletion.to_string(),
            "empty completion from model"
        );
    }
}
