// Admin handlers
// Hit count page and the dev-only reset

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tracing::{info, warn};

use crate::{error::ApiError, metrics::render_metrics_page, state::AppState};

/// Show how many times the static files were requested
/// GET /admin/metrics
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_metrics_page(state.hits.get()))
}

/// Delete every user and zero the hit counter
/// POST /admin/reset
///
/// Refused with 403 unless the platform is `dev`. A refused request leaves
/// both the store and the counter untouched.
pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    if !state.platform.is_dev() {
        warn!("Rejected reset on platform {:?}", state.platform);
        return Err(ApiError::forbidden("Reset is only allowed in dev environment."));
    }

    let deleted = state.store.delete_all_users().await?;
    state.hits.reset();

    info!("Reset hit counter and deleted {} users", deleted);
    Ok((StatusCode::OK, "Hits reset to 0"))
}
