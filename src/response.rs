// Response helpers
// JSON encoding shared by handlers and `ApiError`

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

/// Serialize `payload` and send it with `status`.
/// A payload that cannot be serialized turns into a 500 error response.
pub fn respond_with_json<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(bytes) => json_response(status, bytes),
        Err(err) => {
            tracing::error!("Failed to serialize response payload: {}", err);
            respond_with_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Error marshalling JSON: {}", err),
            )
        }
    }
}

/// Send `{"error": message}` with `status`.
/// Falls back to the raw message as plain text with a 500 if even that fails to encode.
pub fn respond_with_error(status: StatusCode, message: &str) -> Response {
    match serde_json::to_vec(&ErrorBody { error: message }) {
        Ok(bytes) => json_response(status, bytes),
        Err(err) => {
            tracing::error!("Failed to serialize error payload: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error marshalling JSON: {}", err),
            )
                .into_response()
        }
    }
}

fn json_response(status: StatusCode, bytes: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], bytes).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use std::collections::HashMap;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_respond_with_json() {
        let response = respond_with_json(StatusCode::CREATED, &serde_json::json!({"ok": true}));

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(body_string(response).await, r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn test_respond_with_error() {
        let response = respond_with_error(StatusCode::BAD_REQUEST, "Chirp is too long");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
        assert_eq!(body_string(response).await, r#"{"error":"Chirp is too long"}"#);
    }

    #[tokio::test]
    async fn test_unserializable_payload_becomes_server_error() {
        // serde_json only accepts string-like map keys
        let mut payload = HashMap::new();
        payload.insert((1u8, 2u8), 3u8);

        let response = respond_with_json(StatusCode::OK, &payload);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("Error marshalling JSON"));
    }
}
