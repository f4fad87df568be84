use crate::error::MatchError;
use crate::models::UserRecord;

/// Reject records the scorer cannot reason about
///
/// A record needs a non-blank id and a finite rating.
pub fn validate_record(record: &UserRecord, role: &str) -> Result<(), MatchError> {
    if record.id.trim().is_empty() {
        return Err(MatchError::InvalidArgument(format!("{} has an empty id", role)));
    }

    if !record.rating.is_finite() {
        return Err(MatchError::InvalidArgument(format!(
            "{} {} has a non-finite rating",
            role, record.id
        )));
    }

    Ok(())
}

/// Candidates never include the requester
#[inline]
pub fn is_other_user(profile: &UserRecord, exclude_id: &str) -> bool {
    profile.id != exclude_id
}

/// Free-text search predicate
///
/// `needle` must already be trimmed and lower-cased. Matches on a substring
/// of the display name, bio, or any taught or wanted skill.
#[inline]
pub fn matches_search_text(profile: &UserRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    profile.display_name.to_lowercase().contains(needle)
        || profile.bio.to_lowercase().contains(needle)
        || profile.taught.any_contains(needle)
        || profile.wanted.any_contains(needle)
}
