//! HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use medtask_parser::ErrorRecord;

/// An error record paired with the HTTP status it is surfaced under
///
/// Processing failures never come through here; those travel inside a 200
/// body. This type covers the two gateway-level cases: a missing required
/// field (400) and a structural failure such as a non-JSON body (500).
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code
    pub status: StatusCode,

    /// Body payload, `{"error": {"type", "message"}}`
    pub record: ErrorRecord,
}

impl ApiError {
    /// 400 with an `invalid_request` record
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            record: ErrorRecord::invalid_request(message),
        }
    }

    /// 500 with a `server_error` record
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            record: ErrorRecord::server_error(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.record)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medtask_parser::ErrorKind;

    #[test]
    fn test_invalid_request_maps_to_400() {
        let error = ApiError::invalid_request("Missing 'query' field in request body");
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.record.error.kind, ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_server_error_maps_to_500() {
        let error = ApiError::server_error("bad body");
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.record.error.kind, ErrorKind::ServerError);
    }
}
