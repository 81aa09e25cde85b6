//! Request extraction for the upload endpoints.
//!
//! Accepts `multipart/form-data` (optional `text` field, at most one file in
//! the `file` field), `application/json` and `application/x-www-form-urlencoded`
//! bodies carrying an optional `text`. Any other content type is an empty
//! submission. JSON and form bodies are capped at 2 MiB whatever the route's
//! body limit; that limit only governs multipart uploads.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{FormRejection, JsonRejection},
        FromRequest, Multipart, Request,
    },
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::documents::models::{DocumentInput, UploadedFile};
use crate::errors::AppError;
use crate::truthy::is_truthy;

const TEXT_FIELD: &str = "text";
const FILE_FIELD: &str = "file";
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";
const TEXT_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid multipart request: {0}")]
    MultipartRequest(#[from] MultipartRejection),

    #[error("failed to read multipart field: {0}")]
    MultipartField(#[from] MultipartError),

    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),

    #[error("invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    #[error("invalid form body: {0}")]
    Form(#[from] FormRejection),

    #[error("unexpected file field '{0}'")]
    UnexpectedFile(String),

    #[error("more than one file uploaded")]
    MultipleFiles,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        AppError::upload_failed("Upload failed", self).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
struct TextBody {
    #[serde(default)]
    text: Option<String>,
}

/// Extracted upload submission. Handlers take `Result<UploadPayload, UploadError>`
/// so each endpoint can report failures with its own message.
#[derive(Debug)]
pub struct UploadPayload(pub DocumentInput);

#[async_trait]
impl<S> FromRequest<S> for UploadPayload
where
    S: Send + Sync,
{
    type Rejection = UploadError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let input = if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await?;
            read_multipart(multipart).await?
        } else if content_type.starts_with("application/json") {
            let req = limit_text_body(req).await?;
            let Json(body) = Json::<Value>::from_request(req, state).await?;
            text_from_json(&body)
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let req = limit_text_body(req).await?;
            let Form(body) = Form::<TextBody>::from_request(req, state).await?;
            DocumentInput {
                text: body.text,
                ..DocumentInput::default()
            }
        } else {
            DocumentInput::default()
        };

        Ok(UploadPayload(input))
    }
}

/// Buffers the body under `TEXT_BODY_LIMIT_BYTES` and hands back an equivalent request.
async fn limit_text_body(req: Request) -> Result<Request, UploadError> {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, TEXT_BODY_LIMIT_BYTES).await?;
    Ok(Request::from_parts(parts, Body::from(bytes)))
}

/// Any JSON value is accepted. `text` is kept only when it is a string; a truthy
/// non-string still counts as submitted text.
fn text_from_json(body: &Value) -> DocumentInput {
    match body.get(TEXT_FIELD) {
        Some(Value::String(text)) => DocumentInput {
            text: Some(text.clone()),
            ..DocumentInput::default()
        },
        Some(other) => DocumentInput {
            non_string_text: is_truthy(other),
            ..DocumentInput::default()
        },
        None => DocumentInput::default(),
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<DocumentInput, UploadError> {
    let mut input = DocumentInput::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_string) {
            Some(original_name) => {
                if name != FILE_FIELD {
                    return Err(UploadError::UnexpectedFile(name));
                }
                if input.file.is_some() {
                    return Err(UploadError::MultipleFiles);
                }
                let mime_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_MIME_TYPE)
                    .to_string();
                let bytes = field.bytes().await?;
                input.file = Some(UploadedFile {
                    original_name,
                    mime_type,
                    bytes,
                });
            }
            None if name == TEXT_FIELD => {
                input.text = Some(field.text().await?);
            }
            // Other plain fields are accepted and ignored.
            None => {}
        }
    }

    Ok(input)
}
