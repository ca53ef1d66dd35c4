// Handlers module
// HTTP handlers for the Chirpy API

pub mod admin;
pub mod chirps;
pub mod users;

use axum::{http::StatusCode, response::IntoResponse};

/// Readiness probe
/// GET /api/healthz
/// Returns "OK" as plain text, without touching the database
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
