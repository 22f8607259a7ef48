//! MedTask Parser
//!
//! Converts free-text medical instructions to structured intent records
//! using an LLM.
//!
//! # Overview
//!
//! The parser owns a fixed instruction prompt describing the desired
//! `{intent, entities}` JSON output, sends each query to the configured
//! [`LlmProvider`](medtask_llm::LlmProvider) as a two-turn conversation, and
//! recovers a parseable JSON document from the raw model reply.
//!
//! # Architecture
//!
//! ```text
//! Query → MedicalTaskParser → LLM → JSON recovery → ExtractionOutcome
//! ```
//!
//! # The never-throw contract
//!
//! [`MedicalTaskParser::run`] always returns a value. Every failure along
//! the way (model invocation, JSON recovery, parsing) is folded into a
//! value-level [`ErrorRecord`] with kind `processing_error`; nothing
//! propagates to the caller as an `Err`.
//!
//! # Example Usage
//!
//! ```
//! use medtask_llm::MockProvider;
//! use medtask_parser::{MedicalTaskParser, ParserConfig};
//!
//! # async fn example() {
//! let llm = MockProvider::new(r#"[{"intent":"add_patient","entities":{"name":"Ahmed"}}]"#);
//! let parser = MedicalTaskParser::new(llm, ParserConfig::default());
//!
//! let outcome = parser.run("Add patient Ahmed").await;
//! assert!(!outcome.is_error());
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod prompt;
mod recover;
mod parser;


pub use config::{ParserConfig, RecoveryMode};
pub use error::ParserError;
pub use parser::MedicalTaskParser;
pub use prompt::system_prompt;
pub use recover::recover_json;
pub use types::{ErrorBody, ErrorKind, ErrorRecord, ExtractionOutcome, IntentRecord};
