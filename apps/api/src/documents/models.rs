use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Structured output of job-description parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJd {
    pub job_title: Option<String>,
    pub skills: Vec<String>,
    pub experience_years_min: Option<u32>,
    pub qualifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
}

/// Structured output of resume parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub skills: Vec<String>,
    pub experience_years: Option<u32>,
    pub education: Vec<Education>,
}

/// Metadata echoed back for an uploaded file. Field names follow the
/// multipart conventions the frontend already reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    pub originalname: String,
    pub size: usize,
    pub mimetype: String,
}

/// A single file received in a multipart upload, held in memory.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn meta(&self) -> FileMeta {
        FileMeta {
            originalname: self.original_name.clone(),
            size: self.bytes.len(),
            mimetype: self.mime_type.clone(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.mime_type.to_ascii_lowercase().starts_with("text/")
    }
}

/// Everything a client submitted to an upload endpoint: raw text, a file, both, or neither.
#[derive(Debug, Clone, Default)]
pub struct DocumentInput {
    pub text: Option<String>,
    /// Set when a truthy `text` value arrived that is not a string (e.g. `5` in JSON).
    /// It counts as submitted text but has nothing to parse.
    pub non_string_text: bool,
    pub file: Option<UploadedFile>,
}

impl DocumentInput {
    /// True when non-empty text, or a truthy non-string `text`, was submitted.
    pub fn has_text(&self) -> bool {
        self.non_string_text || self.text.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn file_meta(&self) -> Option<FileMeta> {
        self.file.as_ref().map(UploadedFile::meta)
    }
}
