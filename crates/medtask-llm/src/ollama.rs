//! Ollama Provider Implementation
//!
//! Integration with Ollama's local chat API (`/api/chat`).
//!
//! The provider sends the full role-tagged conversation in one request with
//! `stream: false` and takes the content of the single returned message as
//! the raw model response. The output-token budget is carried in the
//! `num_predict` option.
//!
//! There is no retry loop and no request timeout here: a failure is reported
//! once, and a hung model call pends until the transport gives up.
//!
//! # Examples
//!
//! ```no_run
//! use medtask_llm::OllamaProvider;
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "mistral");
//! ```

use crate::{ChatMessage, LlmError, LlmProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Ollama chat API provider for local LLM inference
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

/// Request body for the Ollama chat API
#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
    options: OllamaOptions,
}

/// Generation options
#[derive(Serialize)]
struct OllamaOptions {
    num_predict: u32,
}

/// Response from the Ollama chat API
#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
    #[allow(dead_code)]
    done: bool,
}

#[derive(Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "mistral", "llama3")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a provider against the default local endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// The configured model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.endpoint);

        let request_body = OllamaChatRequest {
            model: &self.model,
            messages,
            stream: false,
            options: OllamaOptions {
                num_predict: max_tokens,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let chat_response: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(chat_response.message.content)
    }
}
