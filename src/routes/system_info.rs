use axum::Json;
use serde_json::{json, Value};
use sysinfo::System;

use crate::models::{now_iso, ClientInfo};

fn megabytes(bytes: u64) -> String {
    format!("{} MB", (bytes as f64 / 1024.0 / 1024.0).round() as u64)
}

/// GET /system-info
pub async fn system_info(client: ClientInfo) -> Json<Value> {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.refresh_cpu();
    let load = System::load_average();

    Json(json!({
        "server": {
            "platform": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
            "hostname": System::host_name().unwrap_or_default(),
            "uptime": System::uptime(),
            "totalMemory": megabytes(sys.total_memory()),
            "freeMemory": megabytes(sys.free_memory()),
            "cpus": sys.cpus().len(),
            "loadAverage": [load.one, load.five, load.fifteen]
        },
        "connection": {
            "clientIP": client.ip,
            "host": client.host,
            "cfRay": client.cf_ray.unwrap_or_else(|| "N/A".to_string()),
            "cfCountry": client.cf_country.unwrap_or_else(|| "N/A".to_string())
        },
        "status": "online",
        "timestamp": now_iso()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn megabytes_rounds() {
        assert_eq!(megabytes(0), "0 MB");
        assert_eq!(megabytes(1024 * 1024 * 3 / 2), "2 MB");
        assert_eq!(megabytes(16 * 1024 * 1024 * 1024), "16384 MB");
    }
}
