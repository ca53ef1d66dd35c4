// Application state
// Shared by every handler through axum's `State` extractor

use std::sync::Arc;

use crate::{config::Platform, metrics::HitCounter, store::UserStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub hits: Arc<HitCounter>,
    pub platform: Platform,
}

impl AppState {
    /// Start with a fresh counter at zero.
    pub fn new(store: Arc<dyn UserStore>, platform: Platform) -> Self {
        AppState {
            store,
            hits: Arc::new(HitCounter::new()),
            platform,
        }
    }
}
