//! MedTask HTTP Gateway
//!
//! Exposes the medical-instruction parser over HTTP:
//!
//! - `GET /health` — liveness check, always `200 {"status":"healthy"}`
//! - `POST /parse` — one query, `{"query": "..."}`
//! - `POST /batch_parse` — ordered list of queries, `{"queries": [...]}`
//!
//! The gateway is stateless per request. A single
//! [`MedicalTaskParser`](medtask_parser::MedicalTaskParser) is constructed
//! at startup and injected into the handlers; processing failures from it
//! arrive as value-level error records and are reported with HTTP 200,
//! unchanged. Only gateway-level structural failures produce non-200
//! statuses: 400 for a missing required field, 500 for a body that is not
//! JSON at all.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
