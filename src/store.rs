// User store
// The seam between HTTP handlers and the users table

use async_trait::async_trait;

use crate::{error::ApiError, models::user::User};

/// Persistence operations the handlers rely on.
///
/// [`crate::db::Database`] is the PostgreSQL implementation. Handlers only see
/// `Arc<dyn UserStore>`, so tests can swap in an in-memory fixture.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user with the given email and return the stored record.
    async fn create_user(&self, email: String) -> Result<User, ApiError>;

    /// Remove every user. Returns the number of rows deleted.
    async fn delete_all_users(&self) -> Result<u64, ApiError>;
}
