// Router
// Fixed method + path table for the Chirpy API

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::{path::Path, sync::Arc};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

use crate::{
    handlers::{
        admin::{metrics, reset},
        chirps::validate_chirp,
        health_check,
        users::create_user,
    },
    metrics::count_hits,
    state::AppState,
};

/// Create the Axum router with all endpoints.
/// Files under `filepath_root` are served at `/app`, and every request there is counted.
pub fn create_router(state: AppState, filepath_root: impl AsRef<Path>) -> Router {
    let static_files = ServiceBuilder::new()
        .layer(middleware::from_fn_with_state(Arc::clone(&state.hits), count_hits))
        .service(ServeDir::new(filepath_root));

    Router::new()
        .route("/api/healthz", get(health_check))
        .route("/api/validate_chirp", post(validate_chirp))
        .route("/api/users", post(create_user))
        .route("/admin/metrics", get(metrics))
        .route("/admin/reset", post(reset))
        .nest_service("/app", static_files)
        .with_state(state)
}
