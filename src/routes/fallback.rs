use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::models::{now_iso, KNOWN_ENDPOINTS};

/// Any request no route or static asset claims.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<Value>) {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": format!("Endpoint not found: {path}"),
            "availableEndpoints": KNOWN_ENDPOINTS,
            "timestamp": now_iso()
        })),
    )
}
