//! Result and error-record types for extraction

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single extracted intent with its entities
///
/// `entities` maps entity names to scalar values. Only information
/// explicitly present in the source query belongs here; see
/// [`IntentRecord::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// Classified action the text requests (e.g. "add_patient")
    pub intent: String,

    /// Named facts attached to the intent
    pub entities: Map<String, Value>,
}

impl IntentRecord {
    /// Validate that the record carries no null, empty, or assumed values
    pub fn validate(&self) -> Result<(), String> {
        if self.intent.is_empty() {
            return Err("intent is empty".to_string());
        }
        for (name, value) in &self.entities {
            match value {
                Value::Null => {
                    return Err(format!("entity '{}' is null", name));
                }
                Value::String(s) if s.is_empty() => {
                    return Err(format!("entity '{}' is an empty string", name));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Fixed vocabulary of error kinds surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Caller omitted or mistyped a required field
    InvalidRequest,
    /// Failure inside the extraction service (model call or JSON recovery)
    ProcessingError,
    /// Failure in gateway-level request handling
    ServerError,
}

/// Error payload: `{"error": {"type": ..., "message": ...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// The error body
    pub error: ErrorBody,
}

/// Body of an [`ErrorRecord`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error kind
    #[serde(rename = "type")]
    pub kind: ErrorKind,

    /// Human-readable description of the failure
    pub message: String,
}

impl ErrorRecord {
    /// Create an error record
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                kind,
                message: message.into(),
            },
        }
    }

    /// An `invalid_request` record
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRequest, message)
    }

    /// A `processing_error` record
    pub fn processing_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProcessingError, message)
    }

    /// A `server_error` record
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServerError, message)
    }
}

/// Outcome of one extraction run
///
/// Both arms travel through the same success channel and serialize to the
/// bare payload: a parsed JSON value (object or array of intent records),
/// or an error record distinguishable only by its `error` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    /// A failure folded into a value-level error record
    Failed(ErrorRecord),
    /// Parsed model output
    Parsed(Value),
}

impl ExtractionOutcome {
    /// Whether this outcome is an error record
    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed(_))
    }

    /// Interpret a parsed outcome as a list of intent records
    ///
    /// An array maps element-wise; a lone object maps to a one-element
    /// list. Returns `None` for error records and for parsed values that
    /// do not fit the intent-record shape.
    pub fn intents(&self) -> Option<Vec<IntentRecord>> {
        match self {
            ExtractionOutcome::Parsed(value @ Value::Array(_)) => {
                serde_json::from_value(value.clone()).ok()
            }
            ExtractionOutcome::Parsed(value @ Value::Object(_)) => {
                serde_json::from_value::<IntentRecord>(value.clone())
                    .ok()
                    .map(|record| vec![record])
            }
            _ => None,
        }
    }
}
