use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::any::Any;

use crate::models::now_iso;

/// The two failure kinds a handler can report: bad client input or a
/// server-side fault whose message is passed back to the caller.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Server failed to save submission to file.")]
    Storage(#[source] std::io::Error),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> Option<String> {
        match self {
            AppError::BadRequest(_) => None,
            AppError::Storage(e) => Some(e.to_string()),
            AppError::Internal(msg) => Some(msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.detail() {
            Some(detail) => json!({
                "success": false,
                "message": self.to_string(),
                "error": detail,
                "timestamp": now_iso()
            }),
            None => json!({
                "success": false,
                "message": self.to_string()
            }),
        };
        (status, Json(body)).into_response()
    }
}

/// Turns a panic escaping a handler into the uniform 500 body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("🚨 Unhandled error: {detail}");
    AppError::Internal(detail).into_response()
}
