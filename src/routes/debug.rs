use axum::Json;
use serde_json::{json, Value};
use sysinfo::System;

use crate::models::{now_iso, ClientInfo, KNOWN_ENDPOINTS};

/// GET /debug
pub async fn debug(client: ClientInfo) -> Json<Value> {
    tracing::info!(
        "🔍 Debug request from: {}",
        client.host.as_deref().unwrap_or("unknown host")
    );

    let tunnel_type = if client.via_tunnel() {
        "Cloudflare Tunnel"
    } else {
        "Direct"
    };

    Json(json!({
        "server": {
            "hostname": System::host_name().unwrap_or_default(),
            "platform": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
            "uptime": System::uptime(),
            "timestamp": now_iso()
        },
        "client": client,
        "tunnel": {
            "status": "active",
            "type": tunnel_type
        },
        "endpoints": KNOWN_ENDPOINTS
    }))
}
