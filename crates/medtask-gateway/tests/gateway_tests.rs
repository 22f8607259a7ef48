//! End-to-end tests driving the router in-process with a mock model

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use medtask_gateway::routes::router;
use medtask_llm::MockProvider;
use medtask_parser::{MedicalTaskParser, ParserConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app(llm: MockProvider) -> Router {
    router(Arc::new(MedicalTaskParser::new(llm, ParserConfig::default())))
}

async fn send(app: Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(body)).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body.to_string())).await
}

#[tokio::test]
async fn health_always_returns_ok() {
    let app = test_app(MockProvider::default());
    let (status, body) = send(app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn health_is_independent_of_model_state() {
    let mut llm = MockProvider::default();
    llm.add_error("anything");
    let app = test_app(llm);

    let (status, _) = send(app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn parse_returns_model_array_verbatim() {
    let expected = json!([
        {"intent": "add_patient", "entities": {"name": "Ahmed", "condition": "diabetes"}}
    ]);
    let mut llm = MockProvider::default();
    llm.add_response("Add patient Ahmed with diabetes", expected.to_string());
    let app = test_app(llm);

    let (status, body) = post_json(
        app,
        "/parse",
        json!({"query": "Add patient Ahmed with diabetes"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn parse_missing_query_field_is_400() {
    let app = test_app(MockProvider::default());

    let (status, body) = post_json(app, "/parse", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request");
    assert_eq!(
        body["error"]["message"],
        "Missing 'query' field in request body"
    );
}

#[tokio::test]
async fn parse_non_string_query_is_400() {
    let app = test_app(MockProvider::default());

    let (status, body) = post_json(app, "/parse", json!({"query": 42})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request");
}

#[tokio::test]
async fn parse_malformed_body_is_500() {
    let app = test_app(MockProvider::default());

    let (status, body) = send(app, "POST", "/parse", Some("this is not json".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["type"], "server_error");
}

#[tokio::test]
async fn parse_processing_failure_is_still_200() {
    let mut llm = MockProvider::default();
    llm.add_error("doomed query");
    let app = test_app(llm);

    let (status, body) = post_json(app, "/parse", json!({"query": "doomed query"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["type"], "processing_error");
}

#[tokio::test]
async fn parse_unparseable_model_output_is_200_processing_error() {
    let llm = MockProvider::new("I could not find any intents, sorry!");
    let app = test_app(llm);

    let (status, body) = post_json(app, "/parse", json!({"query": "gibberish"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["type"], "processing_error");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid JSON output"));
}

#[tokio::test]
async fn batch_parse_preserves_input_order() {
    let mut llm = MockProvider::default();
    llm.add_response("a", r#"[{"intent":"first","entities":{}}]"#);
    llm.add_response("b", r#"[{"intent":"second","entities":{}}]"#);
    let app = test_app(llm);

    let (status, body) = post_json(app, "/batch_parse", json!({"queries": ["a", "b"]})).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0][0]["intent"], "first");
    assert_eq!(results[1][0]["intent"], "second");
}

#[tokio::test]
async fn batch_parse_missing_queries_field_is_400() {
    let app = test_app(MockProvider::default());

    let (status, body) = post_json(app, "/batch_parse", json!({"query": "a"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request");
    assert_eq!(
        body["error"]["message"],
        "Missing 'queries' field in request body"
    );
}

#[tokio::test]
async fn batch_parse_intermixes_errors_with_successes() {
    let mut llm = MockProvider::default();
    llm.add_response("good", r#"[{"intent":"ok","entities":{}}]"#);
    llm.add_error("bad");
    let app = test_app(llm);

    let (status, body) = post_json(
        app,
        "/batch_parse",
        json!({"queries": ["good", "bad", "good"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0][0]["intent"], "ok");
    assert_eq!(results[1]["error"]["type"], "processing_error");
    assert_eq!(results[2][0]["intent"], "ok");
}

#[tokio::test]
async fn batch_parse_non_string_entry_yields_error_record_in_place() {
    let mut llm = MockProvider::default();
    llm.add_response("good", r#"[{"intent":"ok","entities":{}}]"#);
    let app = test_app(llm);

    let (status, body) =
        post_json(app, "/batch_parse", json!({"queries": ["good", 7]})).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["error"]["type"], "processing_error");
}

#[tokio::test]
async fn batch_parse_empty_list_returns_empty_results() {
    let app = test_app(MockProvider::default());

    let (status, body) = post_json(app, "/batch_parse", json!({"queries": []})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn batch_parse_malformed_body_is_500() {
    let app = test_app(MockProvider::default());

    let (status, body) = send(
        app,
        "POST",
        "/batch_parse",
        Some("{not valid".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["type"], "server_error");
}
