// Chirp handlers
// Length check and word filtering for chirp bodies

use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Response, Json};
use tracing::info;

use crate::{
    error::ApiError,
    models::chirp::ValidateChirpRequest,
    response::respond_with_json,
};

/// Validate a chirp and return it with blocked words masked
/// POST /api/validate_chirp
pub async fn validate_chirp(
    payload: Result<Json<ValidateChirpRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;

    request.validate().map_err(ApiError::validation)?;

    let cleaned = request.into_cleaned();
    info!("Validated chirp of {} bytes", cleaned.cleaned_body.len());

    Ok(respond_with_json(StatusCode::OK, &cleaned))
}
