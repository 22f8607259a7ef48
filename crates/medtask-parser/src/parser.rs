//! Core parser implementation

use crate::config::ParserConfig;
use crate::error::ParserError;
use crate::prompt;
use crate::recover::recover_json;
use crate::types::{ErrorRecord, ExtractionOutcome};
use medtask_llm::{ChatMessage, LlmProvider};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns one free-text medical instruction into one structured result
///
/// Holds the fixed instruction prompt and the model handle; both are
/// read-only after construction, so a single instance is shared across all
/// requests for the life of the process.
pub struct MedicalTaskParser<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: ParserConfig,
    system_prompt: String,
}

impl<L> MedicalTaskParser<L>
where
    L: LlmProvider + 'static,
{
    /// Create a new parser around an LLM provider
    pub fn new(provider: L, config: ParserConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
            system_prompt: prompt::system_prompt(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Process one query and return a structured result
    ///
    /// This never fails: model invocation errors and JSON recovery errors
    /// are folded into a value-level `processing_error` record and returned
    /// through the same channel as successes.
    pub async fn run(&self, query: &str) -> ExtractionOutcome {
        info!(
            "parsing query: {} chars, model '{}'",
            query.len(),
            self.config.model_name
        );

        match self.run_inner(query).await {
            Ok(value) => ExtractionOutcome::Parsed(value),
            Err(e) => {
                warn!("extraction failed: {}", e);
                ExtractionOutcome::Failed(ErrorRecord::processing_error(e.to_string()))
            }
        }
    }

    async fn run_inner(&self, query: &str) -> Result<Value, ParserError> {
        let messages = [
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(query),
        ];

        let raw = self
            .provider
            .complete(&messages, self.config.max_output_tokens)
            .await
            .map_err(|e| ParserError::Llm(e.to_string()))?;

        debug!("model response: {} chars", raw.len());

        recover_json(&raw, self.config.recovery_mode)
    }
}
