use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::client::{ClientAddr, JsonOrForm};
use crate::error::AppError;
use crate::models::{LoginForm, SubmissionRecord};
use crate::state::AppState;

/// POST /save-login
///
/// Validates that both fields are present, then appends one record holding
/// the timestamp, client address and email. The password is never stored
/// or logged.
pub async fn save_login(
    State(state): State<Arc<AppState>>,
    ClientAddr(ip): ClientAddr,
    JsonOrForm(form): JsonOrForm<LoginForm>,
) -> Result<Json<Value>, AppError> {
    let login = form.accept().inspect_err(|_| {
        tracing::warn!("❌ Submission rejected from {ip}: missing email or password");
    })?;

    let record = SubmissionRecord::new(login, ip);
    state.submissions.append(&record).await.map_err(|e| {
        tracing::error!("🚨 Failed to write to file: {e}");
        AppError::Storage(e)
    })?;

    tracing::info!(
        "✅ Submission from {} recorded in {}",
        record.client_ip,
        state.submissions.path().display()
    );

    Ok(Json(json!({
        "success": true,
        "message": "Submission recorded successfully."
    })))
}

/// OPTIONS /save-login without CORS preflight headers. Real preflights are
/// answered by the CORS layer before reaching this handler.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
