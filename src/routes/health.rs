use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use sysinfo::System;

use crate::models::now_iso;
use crate::state::AppState;

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let uptime = Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds();

    Json(json!({
        "status": "healthy",
        "server": System::host_name().unwrap_or_default(),
        "uptime_secs": uptime,
        "timestamp": now_iso(),
        "message": "Server is running and ready for Cloudflare Tunnel"
    }))
}
