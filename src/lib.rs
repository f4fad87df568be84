//! Skill-Link Algo - skill-exchange matching service
//!
//! Matches people who can teach each other: a candidate scores one point for
//! every skill they can teach the requester and every skill the requester
//! can teach them. The same crate provides the free-text directory search
//! and an HTTP service over a pluggable profile store.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, SkillSet};
pub use error::MatchError;
pub use models::{MatchKind, MatchResult, UserRecord};
pub use services::{InMemoryStore, ProfileStore, StoreError};
