use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank matches for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    /// Falls back to the configured default when absent
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a single pair of users
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComputeMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "candidate_id", rename = "candidateId")]
    pub candidate_id: String,
}

/// Query string for free-text user search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchUsersQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub q: String,
}

/// Create or replace a user profile
///
/// Rating is owned by the directory and is not accepted from clients.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertUserRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub bio: String,
    #[serde(default)]
    pub taught: Vec<String>,
    #[serde(default)]
    pub wanted: Vec<String>,
    #[serde(rename = "isOnline", default)]
    pub is_online: bool,
}

/// Presence update for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceRequest {
    #[serde(rename = "isOnline")]
    pub is_online: bool,
}
