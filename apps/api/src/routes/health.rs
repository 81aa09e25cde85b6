use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Static liveness payload.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": "smart-talent-matcher-backend"
    }))
}
