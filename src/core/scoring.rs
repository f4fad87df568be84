use crate::core::skills::SkillSet;
use crate::models::{MatchKind, UserRecord};
use std::cmp::Ordering;

/// Skill overlap between two users, seen from the requester's side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillOverlap {
    /// requester.taught ∩ candidate.wanted
    pub requester_can_teach: SkillSet,
    /// candidate.taught ∩ requester.wanted
    pub candidate_can_teach: SkillSet,
}

impl SkillOverlap {
    /// Match score: one point per mutually beneficial skill, in either direction
    #[inline]
    pub fn score(&self) -> u32 {
        (self.requester_can_teach.len() + self.candidate_can_teach.len()) as u32
    }

    /// Classify the overlap, or `None` when nothing overlaps
    pub fn kind(&self) -> Option<MatchKind> {
        match (
            self.requester_can_teach.is_empty(),
            self.candidate_can_teach.is_empty(),
        ) {
            (false, false) => Some(MatchKind::Perfect),
            (false, true) => Some(MatchKind::Teach),
            (true, false) => Some(MatchKind::Learn),
            (true, true) => None,
        }
    }
}

/// Compute the bidirectional skill overlap of `requester` and `candidate`
#[inline]
pub fn calculate_overlap(requester: &UserRecord, candidate: &UserRecord) -> SkillOverlap {
    SkillOverlap {
        requester_can_teach: requester.taught.intersection(&candidate.wanted),
        candidate_can_teach: candidate.taught.intersection(&requester.wanted),
    }
}

/// Human-readable summary of a match
pub fn describe_match(kind: MatchKind, overlap: &SkillOverlap) -> String {
    let teach = join_skills(&overlap.requester_can_teach);
    let learn = join_skills(&overlap.candidate_can_teach);

    match kind {
        MatchKind::Perfect => format!("Perfect Match! You can teach {} and learn {}", teach, learn),
        MatchKind::Teach => format!("You can help them with: {}", teach),
        MatchKind::Learn => format!("They can help you with: {}", learn),
    }
}

fn join_skills(skills: &SkillSet) -> String {
    skills.iter().collect::<Vec<_>>().join(", ")
}

/// Presence and activity ordering shared by ranking and search
///
/// Online before offline, then rating descending, then most recently
/// active first, then id ascending so the order is total.
pub fn compare_activity(a: &UserRecord, b: &UserRecord) -> Ordering {
    b.is_online
        .cmp(&a.is_online)
        .then_with(|| b.rating.total_cmp(&a.rating))
        .then_with(|| b.last_active.cmp(&a.last_active))
        .then_with(|| a.id.cmp(&b.id))
}

/// Canonical ranking order: score descending, then [`compare_activity`]
pub fn compare_ranked(
    a_score: u32,
    a: &UserRecord,
    b_score: u32,
    b: &UserRecord,
) -> Ordering {
    b_score.cmp(&a_score).then_with(|| compare_activity(a, b))
}
