//! Document parsing — pluggable, trait-based parsers for uploaded JDs and resumes.
//!
//! Default: `MockDocumentParser` (fixed results so the frontend flow works end to end).
//! Alternative: `KeywordDocumentParser` (skills found by scanning readable text
//! against a fixed technology vocabulary).
//!
//! `AppState` holds an `Arc<dyn DocumentParser>`, chosen at startup via config.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::ParserBackend;
use crate::documents::models::{DocumentInput, Education, ParsedJd, ParsedResume};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file '{name}' is declared as {mime_type} but is not valid UTF-8")]
    UndecodableText { name: String, mime_type: String },
}

/// The document parser trait. Implement this to swap backends without touching
/// the upload handlers.
#[async_trait]
pub trait DocumentParser: Send + Sync {
    /// Short backend label for logs.
    fn backend(&self) -> &'static str;

    async fn parse_job_description(&self, input: &DocumentInput) -> Result<ParsedJd, ParseError>;

    async fn parse_resume(&self, input: &DocumentInput) -> Result<ParsedResume, ParseError>;
}

pub fn build_document_parser(backend: ParserBackend) -> Arc<dyn DocumentParser> {
    match backend {
        ParserBackend::Mock => Arc::new(MockDocumentParser),
        ParserBackend::Keyword => Arc::new(KeywordDocumentParser::default()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MockDocumentParser — default backend
// ────────────────────────────────────────────────────────────────────────────

/// Returns the same parse for every submission.
pub struct MockDocumentParser;

#[async_trait]
impl DocumentParser for MockDocumentParser {
    fn backend(&self) -> &'static str {
        "mock"
    }

    async fn parse_job_description(&self, _input: &DocumentInput) -> Result<ParsedJd, ParseError> {
        Ok(ParsedJd {
            job_title: Some("React Developer".to_string()),
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            experience_years_min: Some(3),
            qualifications: vec!["B.Tech CS (preferred)".to_string()],
        })
    }

    async fn parse_resume(&self, _input: &DocumentInput) -> Result<ParsedResume, ParseError> {
        Ok(ParsedResume {
            name: Some("John Doe".to_string()),
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            experience_years: Some(4),
            education: vec![Education {
                degree: "B.Tech".to_string(),
                field: "CSE".to_string(),
            }],
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordDocumentParser — vocabulary scan
// ────────────────────────────────────────────────────────────────────────────

const DEFAULT_SKILL_VOCABULARY: &[&str] = &[
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "JavaScript",
    "TypeScript",
    "HTML",
    "CSS",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "SQL",
    "Redis",
    "GraphQL",
    "Python",
    "Django",
    "Flask",
    "FastAPI",
    "Java",
    "Spring Boot",
    "Kotlin",
    "C++",
    "C#",
    "Rust",
    "Golang",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Git",
    "Linux",
    "Kafka",
    "Machine Learning",
    "TensorFlow",
    "PyTorch",
    "Communication",
    "Leadership",
];

/// Finds vocabulary skills in the readable text of a submission.
///
/// Matching is case-insensitive and requires a non-alphanumeric character (or
/// the text edge) on both sides, so "Java" does not fire inside "JavaScript".
/// Only skills are extracted; other fields stay empty.
pub struct KeywordDocumentParser {
    vocabulary: Vec<String>,
}

impl Default for KeywordDocumentParser {
    fn default() -> Self {
        Self::with_vocabulary(DEFAULT_SKILL_VOCABULARY.iter().copied())
    }
}

impl KeywordDocumentParser {
    pub fn with_vocabulary<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
        }
    }

    fn extract_skills(&self, input: &DocumentInput) -> Result<Vec<String>, ParseError> {
        let haystack = readable_text(input)?.join("\n").to_lowercase();
        let skills: Vec<String> = self
            .vocabulary
            .iter()
            .filter(|skill| contains_term(&haystack, &skill.to_lowercase()))
            .cloned()
            .collect();
        debug!("Keyword parser found {} skills", skills.len());
        Ok(skills)
    }
}

#[async_trait]
impl DocumentParser for KeywordDocumentParser {
    fn backend(&self) -> &'static str {
        "keyword"
    }

    async fn parse_job_description(&self, input: &DocumentInput) -> Result<ParsedJd, ParseError> {
        Ok(ParsedJd {
            skills: self.extract_skills(input)?,
            ..ParsedJd::default()
        })
    }

    async fn parse_resume(&self, input: &DocumentInput) -> Result<ParsedResume, ParseError> {
        Ok(ParsedResume {
            skills: self.extract_skills(input)?,
            ..ParsedResume::default()
        })
    }
}

/// Readable text of a submission: the `text` field plus the body of any
/// `text/*` file. Binary formats contribute nothing.
fn readable_text(input: &DocumentInput) -> Result<Vec<&str>, ParseError> {
    let mut parts = Vec::new();
    if let Some(text) = input.text.as_deref().filter(|t| !t.is_empty()) {
        parts.push(text);
    }
    if let Some(file) = input.file.as_ref().filter(|f| f.is_text()) {
        let body = std::str::from_utf8(&file.bytes).map_err(|_| ParseError::UndecodableText {
            name: file.original_name.clone(),
            mime_type: file.mime_type.clone(),
        })?;
        parts.push(body);
    }
    Ok(parts)
}

/// True if `term` occurs in `haystack` with no alphanumeric neighbour on either side.
fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + term.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
