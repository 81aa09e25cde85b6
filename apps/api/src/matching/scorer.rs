//! Skill-overlap scorer.
//!
//! score = round_half_up(100 * |R ∩ C| / |R|), where R is the required
//! (job description) skill set and C the candidate (resume) skill set.
//! An empty R scores 0.

use serde::{Deserialize, Serialize};

use crate::matching::skills::SkillSet;

/// Scores at or above this value get the "meets most" explanation.
pub const STRONG_MATCH_THRESHOLD: u32 = 80;

pub const STRONG_MATCH_EXPLANATION: &str =
    "Candidate meets most skill requirements and likely experience criteria.";
pub const PARTIAL_MATCH_EXPLANATION: &str =
    "Partial skill match. Consider training or alternative role.";

/// Outcome of scoring one resume against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub explanation: String,
}

/// Scores a candidate skill set against the required skill set.
pub fn score_skill_overlap(required: &SkillSet, candidate: &SkillSet) -> MatchResult {
    let score = overlap_percentage(required.overlap(candidate), required.len());
    MatchResult {
        score,
        explanation: explanation_for(score).to_string(),
    }
}

/// Convenience wrapper that normalizes raw skill lists before scoring.
pub fn score_skills<R, C>(required: &[R], candidate: &[C]) -> MatchResult
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    score_skill_overlap(
        &SkillSet::from_skills(required),
        &SkillSet::from_skills(candidate),
    )
}

/// Percentage of `required` covered by `overlap`, rounded half-up.
///
/// Integer arithmetic keeps boundary cases exact: 1/8 → 12.5 → 13,
/// 2/3 → 66.67 → 67.
pub fn overlap_percentage(overlap: usize, required: usize) -> u32 {
    if required == 0 {
        return 0;
    }
    let overlap = overlap.min(required) as u64;
    let required = required as u64;
    ((200 * overlap + required) / (2 * required)) as u32
}

pub fn explanation_for(score: u32) -> &'static str {
    if score >= STRONG_MATCH_THRESHOLD {
        STRONG_MATCH_EXPLANATION
    } else {
        PARTIAL_MATCH_EXPLANATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_empty_required_scores_zero() {
        assert_eq!(score_skills(&NONE, &["react"]).score, 0);
        assert_eq!(score_skills(&NONE, &NONE).score, 0);
    }

    #[test]
    fn test_identical_sets_score_100() {
        let skills = ["Rust", "Tokio", "Axum"];
        let result = score_skills(&skills, &["rust", "TOKIO", "axum"]);
        assert_eq!(result.score, 100);
        assert_eq!(result.explanation, STRONG_MATCH_EXPLANATION);
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(score_skills(&["React"], &["react"]).score, 100);
    }

    #[test]
    fn test_no_partial_string_matching() {
        assert_eq!(score_skills(&["Node.js"], &["Node"]).score, 0);
    }

    #[test]
    fn test_reference_scenario_two_of_three() {
        let result = score_skills(&["React", "Node.js", "MongoDB"], &["react", "node.js", "sql"]);
        assert_eq!(result.score, 67);
        assert_eq!(result.explanation, PARTIAL_MATCH_EXPLANATION);
    }

    #[test]
    fn test_duplicate_required_skills_collapse() {
        // R = {react, sql}; only react is covered.
        let result = score_skills(&["React", "react", "SQL"], &["react"]);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_extra_candidate_skills_do_not_inflate_score() {
        let result = score_skills(&["rust"], &["rust", "go", "java", "python"]);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_empty_candidate_scores_zero() {
        let result = score_skills(&["rust", "go"], &NONE);
        assert_eq!(result.score, 0);
        assert_eq!(result.explanation, PARTIAL_MATCH_EXPLANATION);
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(overlap_percentage(1, 8), 13); // 12.5
        assert_eq!(overlap_percentage(3, 8), 38); // 37.5
        assert_eq!(overlap_percentage(1, 3), 33);
        assert_eq!(overlap_percentage(2, 3), 67);
        assert_eq!(overlap_percentage(133, 200), 67); // 66.5
    }

    #[test]
    fn test_score_bounded_0_to_100() {
        for required in 0..=25 {
            for overlap in 0..=required {
                let score = overlap_percentage(overlap, required);
                assert!(score <= 100, "{overlap}/{required} gave {score}");
            }
        }
        assert_eq!(overlap_percentage(5, 3), 100);
    }

    #[test]
    fn test_threshold_boundary() {
        assert_eq!(overlap_percentage(4, 5), 80);
        assert_eq!(explanation_for(80), STRONG_MATCH_EXPLANATION);
        assert_eq!(overlap_percentage(79, 100), 79);
        assert_eq!(explanation_for(79), PARTIAL_MATCH_EXPLANATION);
    }

    #[test]
    fn test_four_of_five_meets_most() {
        let result = score_skills(&["a", "b", "c", "d", "e"], &["A", "B", "C", "D"]);
        assert_eq!(result.score, 80);
        assert_eq!(result.explanation, STRONG_MATCH_EXPLANATION);
    }

    #[test]
    fn test_match_result_serializes_to_contract_shape() {
        let result = score_skills(&["React"], &["react"]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 100);
        assert_eq!(json["explanation"], STRONG_MATCH_EXPLANATION);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
