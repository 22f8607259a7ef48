//! Configuration for the parser

use serde::{Deserialize, Serialize};

/// Delimiter handling for the JSON recovery step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecoveryMode {
    /// Scan only object delimiters (`{`/`}`), matching the historical
    /// behavior. A top-level array reply loses its brackets: a one-element
    /// array degrades to the bare inner object, larger arrays fail to parse.
    BraceOnly,
    /// Scan whichever of `{` or `[` occurs first and cut on the matching
    /// pair, so top-level array replies survive intact.
    BraceOrBracket,
}

impl Default for RecoveryMode {
    fn default() -> Self {
        RecoveryMode::BraceOrBracket
    }
}

/// Configuration for the parser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Maximum-output-length budget passed to the model, in tokens
    pub max_output_tokens: u32,

    /// Model name label used in logs
    pub model_name: String,

    /// Delimiter handling for JSON recovery
    pub recovery_mode: RecoveryMode,
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        if self.model_name.is_empty() {
            return Err("model_name must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_output_tokens: 500,
            model_name: "mistral".to_string(),
            recovery_mode: RecoveryMode::default(),
        }
    }
}
