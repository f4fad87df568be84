// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchKind, MatchResult, UserRecord};
pub use requests::{
    ComputeMatchRequest, FindMatchesRequest, PresenceRequest, SearchUsersQuery, UpsertUserRequest,
};
pub use responses::{
    ComputeMatchResponse, ErrorResponse, FindMatchesResponse, HealthResponse, SearchUsersResponse,
};
