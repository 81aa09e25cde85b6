//! Axum route handlers for the upload API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::documents::explain::explain_fields;
use crate::documents::models::{DocumentInput, FileMeta, ParsedJd, ParsedResume};
use crate::documents::upload::{UploadError, UploadPayload};
use crate::errors::AppError;
use crate::state::AppState;

const JD_UPLOAD_FAILED: &str = "JD upload failed";
const RESUME_UPLOAD_FAILED: &str = "Resume upload failed";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct JdReceived {
    #[serde(rename = "jdText")]
    pub jd_text: bool,
    pub file: Option<FileMeta>,
}

#[derive(Debug, Serialize)]
pub struct JdUploadResponse {
    pub received: JdReceived,
    pub parsed: ParsedJd,
    pub explanations: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeReceived {
    #[serde(rename = "resumeText")]
    pub resume_text: bool,
    pub file: Option<FileMeta>,
}

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub received: ResumeReceived,
    pub parsed: ParsedResume,
    pub explanations: BTreeMap<String, String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/jd/upload
///
/// Accepts JD text and/or a single file and returns the parser's result.
pub async fn handle_jd_upload(
    State(state): State<AppState>,
    payload: Result<UploadPayload, UploadError>,
) -> Result<Json<JdUploadResponse>, AppError> {
    let UploadPayload(input) = payload.map_err(|e| AppError::upload_failed(JD_UPLOAD_FAILED, e))?;
    log_receipt("JD", &input);

    let parsed = state
        .parser
        .parse_job_description(&input)
        .await
        .map_err(|e| AppError::upload_failed(JD_UPLOAD_FAILED, e))?;
    let explanations = explanations_for(&parsed, JD_UPLOAD_FAILED)?;

    Ok(Json(JdUploadResponse {
        received: JdReceived {
            jd_text: input.has_text(),
            file: input.file_meta(),
        },
        parsed,
        explanations,
    }))
}

/// POST /api/resume/upload
///
/// Accepts resume text and/or a single file and returns the parser's result.
pub async fn handle_resume_upload(
    State(state): State<AppState>,
    payload: Result<UploadPayload, UploadError>,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let UploadPayload(input) =
        payload.map_err(|e| AppError::upload_failed(RESUME_UPLOAD_FAILED, e))?;
    log_receipt("Resume", &input);

    let parsed = state
        .parser
        .parse_resume(&input)
        .await
        .map_err(|e| AppError::upload_failed(RESUME_UPLOAD_FAILED, e))?;
    let explanations = explanations_for(&parsed, RESUME_UPLOAD_FAILED)?;

    Ok(Json(ResumeUploadResponse {
        received: ResumeReceived {
            resume_text: input.has_text(),
            file: input.file_meta(),
        },
        parsed,
        explanations,
    }))
}

fn explanations_for<T: Serialize>(
    parsed: &T,
    failure: &'static str,
) -> Result<BTreeMap<String, String>, AppError> {
    let value = serde_json::to_value(parsed).map_err(|e| AppError::upload_failed(failure, e))?;
    Ok(explain_fields(&value))
}

fn log_receipt(kind: &str, input: &DocumentInput) {
    match &input.file {
        Some(file) => info!(
            "{kind} upload received: text={}, file={} ({} bytes, {})",
            input.has_text(),
            file.original_name,
            file.bytes.len(),
            file.mime_type
        ),
        None => info!("{kind} upload received: text={}, no file", input.has_text()),
    }
}
