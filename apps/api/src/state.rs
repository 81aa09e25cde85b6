use std::sync::Arc;

use crate::config::Config;
use crate::documents::parser::{build_document_parser, DocumentParser};

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document parser. Default: MockDocumentParser. Swap via DOCUMENT_PARSER env.
    pub parser: Arc<dyn DocumentParser>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let parser = build_document_parser(config.document_parser);
        Self { config, parser }
    }
}
