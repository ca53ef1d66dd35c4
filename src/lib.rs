// Library root for the Chirpy API

pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use db::Database;
pub use error::ApiError;
pub use metrics::HitCounter;
pub use models::{CleanedChirp, CreateUserRequest, User, ValidateChirpRequest};
pub use routes::create_router;
pub use state::AppState;
pub use store::UserStore;
