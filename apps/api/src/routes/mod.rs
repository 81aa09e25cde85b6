pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::documents::handlers::{handle_jd_upload, handle_resume_upload};
use crate::matching::handlers::handle_match;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // The upload limit governs multipart bodies; JSON and form uploads stay capped
    // at 2 MiB inside the extractor. Other routes keep axum's 2 MiB default.
    let uploads = Router::new()
        .route("/api/jd/upload", post(handle_jd_upload))
        .route("/api/resume/upload", post(handle_resume_upload))
        .layer(DefaultBodyLimit::max(state.config.upload_limit_bytes));

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/match", post(handle_match))
        .merge(uploads)
        .with_state(state)
}

/// CORS for the single configured frontend origin, with credentials.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}
