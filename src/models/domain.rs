use crate::core::skills::SkillSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only snapshot of a user in the skill directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    /// Skills this user can teach
    #[serde(default)]
    pub taught: SkillSet,
    /// Skills this user wants to learn
    #[serde(default)]
    pub wanted: SkillSet,
    #[serde(rename = "isOnline", default)]
    pub is_online: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "lastActive")]
    pub last_active: DateTime<Utc>,
}

/// Which direction(s) a match benefits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Both users can teach each other something
    Perfect,
    /// Only the requester can teach the candidate
    Teach,
    /// Only the candidate can teach the requester
    Learn,
}

/// Scored compatibility between a requester and one candidate
///
/// Derived per query and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate: UserRecord,
    pub score: u32,
    #[serde(rename = "requesterCanTeach")]
    pub requester_can_teach: Vec<String>,
    #[serde(rename = "candidateCanTeach")]
    pub candidate_can_teach: Vec<String>,
    pub kind: MatchKind,
    pub explanation: String,
}
