use crate::core::{
    filters::{is_other_user, matches_search_text, validate_record},
    scoring::{calculate_overlap, compare_activity, compare_ranked, describe_match},
};
use crate::error::MatchError;
use crate::models::{MatchResult, UserRecord};

/// Stateless skill-exchange matcher
///
/// Every call works on the snapshot it is handed and keeps nothing between
/// calls, so re-invoking with a fresh pool is always safe.
///
/// # Operations
/// - [`Matcher::compute_match`]: score one candidate against the requester
/// - [`Matcher::rank_candidates`]: score, filter and rank a whole pool
/// - [`Matcher::search_candidates`]: plain text search, no scoring
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    min_score: u32,
}

impl Matcher {
    /// Create a matcher that drops ranked results scoring below `min_score`
    ///
    /// `min_score` is clamped to at least 1, so zero-score candidates are
    /// never ranked.
    pub fn new(min_score: u32) -> Self {
        Self {
            min_score: min_score.max(1),
        }
    }

    pub fn min_score(&self) -> u32 {
        self.min_score
    }

    /// Score `candidate` against `requester`
    ///
    /// Returns `Ok(None)` when the two share no skill in either direction,
    /// or when both records are the same user.
    pub fn compute_match(
        &self,
        requester: &UserRecord,
        candidate: &UserRecord,
    ) -> Result<Option<MatchResult>, MatchError> {
        validate_record(requester, "requester")?;
        validate_record(candidate, "candidate")?;

        Ok(score_candidate(requester, candidate))
    }

    /// Rank a candidate pool for `requester`
    ///
    /// # Arguments
    /// * `requester` - The user asking for matches
    /// * `pool` - Snapshot of other users; the requester is skipped if present
    /// * `limit` - Maximum number of results, must be at least 1
    ///
    /// # Returns
    /// Matches sorted by score, presence, rating, last activity and id
    pub fn rank_candidates<'a, I>(
        &self,
        requester: &UserRecord,
        pool: I,
        limit: usize,
    ) -> Result<Vec<MatchResult>, MatchError>
    where
        I: IntoIterator<Item = &'a UserRecord>,
    {
        if limit == 0 {
            return Err(MatchError::InvalidArgument(
                "limit must be a positive integer".to_string(),
            ));
        }
        validate_record(requester, "requester")?;

        let mut matches = Vec::new();
        for candidate in pool {
            validate_record(candidate, "candidate")?;

            if let Some(result) = score_candidate(requester, candidate) {
                if result.score >= self.min_score {
                    matches.push(result);
                }
            }
        }

        matches.sort_by(|a, b| compare_ranked(a.score, &a.candidate, b.score, &b.candidate));
        matches.truncate(limit);

        tracing::debug!(
            "Ranked {} matches for {} (limit {})",
            matches.len(),
            requester.id,
            limit
        );

        Ok(matches)
    }

    /// Free-text search over a pool
    ///
    /// A blank `query` returns everyone except `exclude_id`. Otherwise a user
    /// is returned when the query is a case-insensitive substring of their
    /// name, bio, or any of their skills. Compatibility is not considered.
    pub fn search_candidates<'a, I>(
        &self,
        pool: I,
        query: &str,
        exclude_id: &str,
    ) -> Result<Vec<UserRecord>, MatchError>
    where
        I: IntoIterator<Item = &'a UserRecord>,
    {
        let needle = query.trim().to_lowercase();

        let mut users = Vec::new();
        for profile in pool {
            validate_record(profile, "candidate")?;

            if is_other_user(profile, exclude_id) && matches_search_text(profile, &needle) {
                users.push(profile.clone());
            }
        }

        users.sort_by(compare_activity);

        Ok(users)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(1)
    }
}

fn score_candidate(requester: &UserRecord, candidate: &UserRecord) -> Option<MatchResult> {
    if !is_other_user(candidate, &requester.id) {
        return None;
    }

    let overlap = calculate_overlap(requester, candidate);
    let kind = overlap.kind()?;

    Some(MatchResult {
        candidate: candidate.clone(),
        score: overlap.score(),
        requester_can_teach: overlap.requester_can_teach.to_vec(),
        candidate_can_teach: overlap.candidate_can_teach.to_vec(),
        explanation: describe_match(kind, &overlap),
        kind,
    })
}
