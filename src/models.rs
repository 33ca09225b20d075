use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

/// Routes advertised by `/debug` and the 404 fallback.
pub const KNOWN_ENDPOINTS: &[&str] = &[
    "GET  /",
    "GET  /health",
    "GET  /debug",
    "GET  /system-info",
    "GET  /test",
    "POST /save-login",
];

pub fn to_iso(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_iso() -> String {
    to_iso(Utc::now())
}

// ── Client identity, as seen through a proxy or tunnel ───
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub ip: String,
    pub host: Option<String>,
    pub origin: Option<String>,
    pub user_agent: Option<String>,
    pub cf_ray: Option<String>,
    pub cf_country: Option<String>,
    #[serde(rename = "cfConnectingIP")]
    pub cf_connecting_ip: Option<String>,
}

impl ClientInfo {
    pub fn via_tunnel(&self) -> bool {
        self.cf_ray.is_some()
    }
}

// ── Login form body ──────────────────────────────────────
#[derive(Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

impl LoginForm {
    /// Both fields must be present and non-empty. The password is checked
    /// for presence and then dropped; it never reaches the log.
    pub fn accept(self) -> Result<AcceptedLogin, AppError> {
        let email = self.email.filter(|s| !s.is_empty());
        let has_password = self.password.is_some_and(|s| !s.is_empty());

        match email {
            Some(email) if has_password => Ok(AcceptedLogin { email }),
            _ => Err(AppError::BadRequest(
                "Email and password are required.".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedLogin {
    pub email: String,
}

// ── One line of the submission log ───────────────────────
#[derive(Debug, Clone)]
pub struct SubmissionRecord {
    pub timestamp: DateTime<Utc>,
    pub client_ip: String,
    pub email: String,
}

impl SubmissionRecord {
    pub fn new(login: AcceptedLogin, client_ip: String) -> Self {
        Self {
            timestamp: Utc::now(),
            client_ip,
            email: login.email,
        }
    }

    /// `[<timestamp>][<ip>] Email: <email>, Password: [redacted]` plus newline.
    /// Line breaks in client-supplied text are escaped so a record is always one line.
    pub fn to_line(&self) -> String {
        format!(
            "[{}][{}] Email: {}, Password: [redacted]\n",
            to_iso(self.timestamp),
            single_line(&self.client_ip),
            single_line(&self.email)
        )
    }
}

fn single_line(s: &str) -> String {
    s.replace('\r', "\\r").replace('\n', "\\n")
}
