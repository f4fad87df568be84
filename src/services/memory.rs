use crate::models::UserRecord;
use crate::services::fixtures::demo_users;
use crate::services::store::{validate_user, ProfileStore, StoreError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-memory profile directory
///
/// Holds the records it was seeded with; [`InMemoryStore::reset`] puts the
/// directory back to that seed, which is how tests isolate themselves.
pub struct InMemoryStore {
    users: RwLock<BTreeMap<String, UserRecord>>,
    seed: Vec<UserRecord>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Create a store seeded with `users`
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: RwLock::new(index_by_id(&users)),
            seed: users,
        }
    }

    /// Create a store seeded with the demo directory
    pub fn with_demo_users() -> Self {
        Self::with_users(demo_users())
    }

    /// Drop all changes and restore the seed records
    pub async fn reset(&self) {
        let mut users = self.users.write().await;
        *users = index_by_id(&self.seed);
        tracing::debug!("In-memory store reset to {} seed users", users.len());
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn index_by_id(users: &[UserRecord]) -> BTreeMap<String, UserRecord> {
    users
        .iter()
        .map(|user| (user.id.clone(), user.clone()))
        .collect()
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get_user(&self, user_id: &str) -> Result<UserRecord, StoreError> {
        self.users
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn upsert_user(&self, user: &UserRecord) -> Result<(), StoreError> {
        validate_user(user)?;

        self.users
            .write()
            .await
            .insert(user.id.clone(), user.clone());

        tracing::debug!("Upserted user {}", user.id);
        Ok(())
    }

    async fn set_online(&self, user_id: &str, is_online: bool) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))?;

        user.is_online = is_online;
        user.last_active = chrono::Utc::now();
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
