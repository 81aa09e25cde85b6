//! Axum route handler for the Match API.

use axum::Json;
use bytes::Bytes;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::scorer::{score_skills, MatchResult};
use crate::matching::skills::{skills_from_payload, SkillListError};

/// Skill lists pulled out of a match request body.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MatchRequest {
    pub required_skills: Vec<String>,
    pub candidate_skills: Vec<String>,
}

/// Decodes `{ parsedJD?: { skills? }, parsedResume?: { skills? } }`.
///
/// An empty, unparseable, or non-object body means both lists are empty.
/// Skill lists that exist but are not arrays of strings are rejected.
pub fn decode_match_request(body: &[u8]) -> Result<MatchRequest, SkillListError> {
    let fields = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        _ => return Ok(MatchRequest::default()),
    };

    Ok(MatchRequest {
        required_skills: skills_from_payload(fields.get("parsedJD"), "parsedJD")?,
        candidate_skills: skills_from_payload(fields.get("parsedResume"), "parsedResume")?,
    })
}

/// POST /api/match
///
/// Scores resume skills against JD skills.
pub async fn handle_match(body: Bytes) -> Result<Json<MatchResult>, AppError> {
    let request = decode_match_request(&body)?;
    let result = score_skills(&request.required_skills, &request.candidate_skills);

    debug!(
        "Match scored {} ({} required, {} candidate skills)",
        result.score,
        request.required_skills.len(),
        request.candidate_skills.len()
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_empty_request() {
        assert_eq!(decode_match_request(b"").unwrap(), MatchRequest::default());
    }

    #[test]
    fn test_malformed_json_is_empty_request() {
        assert_eq!(
            decode_match_request(b"{\"parsedJD\": [").unwrap(),
            MatchRequest::default()
        );
    }

    #[test]
    fn test_non_object_body_is_empty_request() {
        assert_eq!(decode_match_request(b"[1, 2]").unwrap(), MatchRequest::default());
        assert_eq!(decode_match_request(b"null").unwrap(), MatchRequest::default());
    }

    #[test]
    fn test_both_sides_decoded() {
        let body = br#"{
            "parsedJD": { "job_title": "React Developer", "skills": ["React", "Node.js"] },
            "parsedResume": { "skills": ["react"] }
        }"#;
        let request = decode_match_request(body).unwrap();
        assert_eq!(request.required_skills, vec!["React", "Node.js"]);
        assert_eq!(request.candidate_skills, vec!["react"]);
    }

    #[test]
    fn test_one_side_missing() {
        let request = decode_match_request(br#"{"parsedResume": {"skills": ["sql"]}}"#).unwrap();
        assert!(request.required_skills.is_empty());
        assert_eq!(request.candidate_skills, vec!["sql"]);
    }

    #[test]
    fn test_non_string_skill_rejected() {
        let err =
            decode_match_request(br#"{"parsedJD": {"skills": ["React", null]}}"#).unwrap_err();
        assert_eq!(
            err,
            SkillListError::NonStringElement {
                side: "parsedJD",
                index: 1
            }
        );
    }

    #[tokio::test]
    async fn test_handle_match_reference_scenario() {
        let body = Bytes::from_static(
            br#"{"parsedJD":{"skills":["React","Node.js","MongoDB"]},"parsedResume":{"skills":["react","node.js","sql"]}}"#,
        );
        let Json(result) = handle_match(body).await.unwrap();
        assert_eq!(result.score, 67);
        assert_eq!(
            result.explanation,
            "Partial skill match. Consider training or alternative role."
        );
    }

    #[tokio::test]
    async fn test_handle_match_invalid_skills_is_error() {
        let body = Bytes::from_static(br#"{"parsedResume":{"skills":"react"}}"#);
        let err = handle_match(body).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidSkillList(_)));
    }
}
