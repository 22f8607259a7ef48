//! MedTask LLM Provider Layer
//!
//! Pluggable access to the external text-generation model.
//!
//! # Architecture
//!
//! This crate defines the [`LlmProvider`] trait consumed by the extraction
//! service. A provider is handed an ordered list of role-tagged messages plus
//! an output-token budget and returns the text of the first generated
//! candidate. Everything about model loading, tokenization and inference
//! scheduling lives behind this boundary.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OllamaProvider`: Local Ollama chat API integration
//!
//! # Examples
//!
//! ```
//! use medtask_llm::{ChatMessage, LlmProvider, MockProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new("[]");
//! let messages = [ChatMessage::user("Add patient Ahmed with diabetes")];
//! let reply = provider.complete(&messages, 500).await.unwrap();
//! assert_eq!(reply, "[]");
//! # }
//! ```

#![warn(missing_docs)]

pub mod ollama;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Role tag on a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed instruction turn
    System,
    /// Caller-supplied turn
    User,
    /// Model-generated turn
    Assistant,
}

/// A single role-tagged message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who is speaking
    pub role: Role,
    /// Message text, sent verbatim
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Trait for LLM chat-completion providers
///
/// `complete` receives the full conversation and a maximum-output-token
/// budget and resolves to the first candidate's text content.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for the given conversation
    async fn complete(&self, messages: &[ChatMessage], max_tokens: u32)
        -> Result<String, LlmError>;
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses are keyed on the content of the last user message.
///
/// # Examples
///
/// ```
/// use medtask_llm::{ChatMessage, LlmProvider, MockProvider};
///
/// # async fn example() {
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// let messages = [ChatMessage::user("any query")];
/// assert_eq!(provider.complete(&messages, 500).await.unwrap(), "Fixed response");
///
/// // Per-query responses
/// let mut provider = MockProvider::default();
/// provider.add_response("query1", "response1");
/// let messages = [ChatMessage::user("query1")];
/// assert_eq!(provider.complete(&messages, 500).await.unwrap(), "response1");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

const ERROR_SENTINEL: &str = "\u{0}ERROR";

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all queries
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given user message
    pub fn add_response(&mut self, query: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.into(), response.into());
    }

    /// Configure the provider to fail for a specific user message
    pub fn add_error(&mut self, query: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(query.into(), ERROR_SENTINEL.to_string());
    }

    /// Get the number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _max_tokens: u32,
    ) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        let query = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(query) {
            if response == ERROR_SENTINEL {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
