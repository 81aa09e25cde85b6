//! Case-normalized skill sets.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use crate::truthy::is_truthy;

/// A set of lower-cased skill names. Duplicates collapse after case-folding;
/// no trimming or synonym resolution is applied, so "Node.js" and "nodejs"
/// stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: HashSet<String>,
}

impl SkillSet {
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            skills: skills
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Membership test against an already-normalized skill name.
    #[cfg(test)]
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Number of skills present in both sets.
    pub fn overlap(&self, other: &SkillSet) -> usize {
        self.skills.intersection(&other.skills).count()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkillSet::from_skills(iter)
    }
}

/// A skill list in a match request that is set but not a list of strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SkillListError {
    #[error("{side}.skills must be an array of strings")]
    NotAnArray { side: &'static str },

    #[error("{side}.skills[{index}] is not a string")]
    NonStringElement { side: &'static str, index: usize },
}

/// Reads `<side>.skills` from a parsed document payload.
///
/// A payload that is not an object has no skills. A missing or falsy `skills`
/// (`null`, `false`, `0`, `""`) means "no skills". A truthy non-array, or an
/// array with a non-string element, is rejected.
pub fn skills_from_payload(
    payload: Option<&Value>,
    side: &'static str,
) -> Result<Vec<String>, SkillListError> {
    let Some(skills) = payload.and_then(|p| p.as_object()).and_then(|p| p.get("skills")) else {
        return Ok(Vec::new());
    };

    let skills = match skills {
        Value::Array(items) => items,
        other if !is_truthy(other) => return Ok(Vec::new()),
        _ => return Err(SkillListError::NotAnArray { side }),
    };

    skills
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(String::from)
                .ok_or(SkillListError::NonStringElement { side, index })
        })
        .collect()
}
