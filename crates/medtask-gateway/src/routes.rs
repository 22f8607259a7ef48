//! Route definitions and request handlers

use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use medtask_llm::LlmProvider;
use medtask_parser::{ErrorRecord, ExtractionOutcome, MedicalTaskParser};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the gateway router around a shared parser instance
///
/// The router is generic over the LLM provider so tests can substitute a
/// mock without touching the route definitions.
pub fn router<L>(parser: Arc<MedicalTaskParser<L>>) -> Router
where
    L: LlmProvider + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/parse", post(parse_task::<L>))
        .route("/batch_parse", post(batch_parse::<L>))
        .layer(TraceLayer::new_for_http())
        .with_state(parser)
}

/// Health check endpoint; reports healthy regardless of model state
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Parse a single query
///
/// Expected body: `{"query": "your natural language query here"}`
async fn parse_task<L>(
    State(parser): State<Arc<MedicalTaskParser<L>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response
where
    L: LlmProvider + 'static,
{
    let data = match body {
        Ok(Json(data)) => data,
        Err(rejection) => return ApiError::server_error(rejection.body_text()).into_response(),
    };

    let Some(query) = data.get("query").and_then(Value::as_str) else {
        return ApiError::invalid_request("Missing 'query' field in request body")
            .into_response();
    };

    let outcome = parser.run(query).await;

    // Error records from the parser still travel in a 200 body; the
    // gateway does not inspect the outcome.
    (StatusCode::OK, Json(outcome)).into_response()
}

/// Parse an ordered batch of queries
///
/// Expected body: `{"queries": ["query1", "query2", ...]}`. Queries are
/// processed strictly sequentially, and results map one-to-one onto the
/// input order, successes and error records intermixed.
async fn batch_parse<L>(
    State(parser): State<Arc<MedicalTaskParser<L>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response
where
    L: LlmProvider + 'static,
{
    let data = match body {
        Ok(Json(data)) => data,
        Err(rejection) => return ApiError::server_error(rejection.body_text()).into_response(),
    };

    let Some(queries) = data.get("queries").and_then(Value::as_array) else {
        return ApiError::invalid_request("Missing 'queries' field in request body")
            .into_response();
    };

    let mut results = Vec::with_capacity(queries.len());
    for query in queries {
        let outcome = match query.as_str() {
            Some(query) => parser.run(query).await,
            None => ExtractionOutcome::Failed(ErrorRecord::processing_error(
                "query must be a string",
            )),
        };
        results.push(outcome);
    }

    (StatusCode::OK, Json(json!({ "results": results }))).into_response()
}
