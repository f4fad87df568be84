use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Normalize a skill name for comparison: trimmed and lower-cased.
///
/// Returns `None` for names that are empty after trimming.
#[inline]
pub fn normalize_skill(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// An unordered set of normalized skill names
///
/// Names are trimmed and case-folded on the way in, so `"Guitar"` and
/// `" guitar "` are the same skill. No synonym folding is done: `"JS"` and
/// `"JavaScript"` stay distinct. Iteration is lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a skill, returning `false` if it was empty or already present
    pub fn insert(&mut self, name: &str) -> bool {
        match normalize_skill(name) {
            Some(skill) => self.0.insert(skill),
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        normalize_skill(name).is_some_and(|skill| self.0.contains(&skill))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Skills present in both sets
    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.intersection(&other.0).cloned().collect())
    }

    /// True if any skill contains `needle` (already lower-cased) as a substring
    pub fn any_contains(&self, needle: &str) -> bool {
        self.0.iter().any(|skill| skill.contains(needle))
    }

    /// Sorted skill names
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkillSet(
            iter.into_iter()
                .filter_map(|name| normalize_skill(name.as_ref()))
                .collect(),
        )
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.0.into_iter().collect()
    }
}
