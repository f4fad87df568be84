// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod skills;

pub use filters::{is_other_user, matches_search_text, validate_record};
pub use matcher::Matcher;
pub use scoring::{calculate_overlap, compare_activity, compare_ranked, describe_match, SkillOverlap};
pub use skills::{normalize_skill, SkillSet};
