use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tokio_postgres::error::SqlState;

use crate::response::respond_with_error;

/// Message sent for failures whose detail stays in the logs.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Database(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::MalformedBody(_) | ApiError::Database(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::MalformedBody(ref detail) => {
                // Undecodable bodies are reported as server errors without detail
                tracing::debug!("Could not decode request body: {}", detail);
                GENERIC_ERROR_MESSAGE.to_string()
            }
            ApiError::Validation(message) => {
                tracing::debug!("Validation error: {}", message);
                message
            }
            ApiError::Database(message) => {
                tracing::error!("Database error: {}", message);
                message
            }
            ApiError::Forbidden(message) => {
                tracing::warn!("Forbidden request: {}", message);
                message
            }
            ApiError::Internal(ref err) => {
                tracing::error!("Internal server error: {}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        };

        respond_with_error(status, &message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

// PostgreSQL error mapping. The client sees the driver's message.
impl From<tokio_postgres::Error> for ApiError {
    fn from(err: tokio_postgres::Error) -> Self {
        match err.code() {
            Some(&SqlState::UNIQUE_VIOLATION) | Some(&SqlState::NOT_NULL_VIOLATION) => {
                tracing::warn!("PostgreSQL constraint violation: {}", err);
            }
            Some(&SqlState::CONNECTION_EXCEPTION)
            | Some(&SqlState::CONNECTION_DOES_NOT_EXIST)
            | Some(&SqlState::CONNECTION_FAILURE) => {
                tracing::error!("PostgreSQL connection error: {}", err);
            }
            _ => {
                tracing::error!("PostgreSQL error: {} (code: {:?})", err, err.code());
            }
        }

        ApiError::Database(format!("{} : {} ", GENERIC_ERROR_MESSAGE, err))
    }
}

// Connection pool error mapping
impl From<deadpool_postgres::PoolError> for ApiError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        match err {
            deadpool_postgres::PoolError::Timeout(_) => {
                tracing::warn!("Database connection pool timeout: {}", err);
            }
            deadpool_postgres::PoolError::Closed => {
                tracing::error!("Database connection pool is closed: {}", err);
            }
            _ => {
                tracing::error!("Database connection pool error: {}", err);
            }
        }

        ApiError::Database(format!("{} : {} ", GENERIC_ERROR_MESSAGE, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn into_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_client_error() {
        let (status, body) = into_parts(ApiError::validation("Chirp is too long")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "Chirp is too long"}));
    }

    #[tokio::test]
    async fn test_malformed_body_hides_detail() {
        let (status, body) = into_parts(ApiError::MalformedBody("expected value at line 1".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "Something went wrong"}));
    }

    #[tokio::test]
    async fn test_database_error_includes_detail() {
        let err = ApiError::Database("Something went wrong : db error: duplicate key ".into());
        let (status, body) = into_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Something went wrong : db error: duplicate key ");
    }

    #[tokio::test]
    async fn test_forbidden() {
        let (status, body) = into_parts(ApiError::forbidden("Not here")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "Not here");
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let (status, body) = into_parts(ApiError::from(anyhow::anyhow!("secret detail"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Something went wrong");
    }
}
