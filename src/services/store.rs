use crate::models::UserRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when reading or writing the profile directory
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Profile/directory store that supplies user snapshots to the matcher
///
/// Implementations hand out owned snapshots; the matcher never reads the
/// store again while it ranks or searches.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a single active user
    async fn get_user(&self, user_id: &str) -> Result<UserRecord, StoreError>;

    /// Snapshot of every active user
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Create or replace a user together with their taught and wanted skills
    async fn upsert_user(&self, user: &UserRecord) -> Result<(), StoreError>;

    /// Update the presence flag and touch last activity
    async fn set_online(&self, user_id: &str, is_online: bool) -> Result<(), StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}

/// Shared input checks for [`ProfileStore::upsert_user`] implementations
pub fn validate_user(user: &UserRecord) -> Result<(), StoreError> {
    if user.id.trim().is_empty() {
        return Err(StoreError::InvalidInput("user id must not be empty".to_string()));
    }
    if user.display_name.trim().is_empty() {
        return Err(StoreError::InvalidInput(format!(
            "user {} has an empty display name",
            user.id
        )));
    }
    if !user.rating.is_finite() {
        return Err(StoreError::InvalidInput(format!(
            "user {} has a non-finite rating",
            user.id
        )));
    }
    Ok(())
}
