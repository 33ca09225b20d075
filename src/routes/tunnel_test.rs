use axum::Json;
use serde_json::{json, Value};
use sysinfo::System;

use crate::models::{now_iso, ClientInfo};

/// GET /test
pub async fn tunnel_test(client: ClientInfo) -> Json<Value> {
    Json(json!({
        "message": "Cloudflare Tunnel Test Successful!",
        "client": {
            "ip": client.ip,
            "host": client.host,
            "cfHeaders": {
                "ray": client.cf_ray,
                "country": client.cf_country,
                "connectingIP": client.cf_connecting_ip
            }
        },
        "server": System::host_name().unwrap_or_default(),
        "timestamp": now_iso()
    }))
}
