use axum::async_trait;
use axum::extract::{ConnectInfo, FromRequest, FromRequestParts, Request};
use axum::http::header::{CONTENT_TYPE, HOST, ORIGIN, USER_AGENT};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::models::ClientInfo;

pub const CF_CONNECTING_IP: &str = "cf-connecting-ip";
pub const CF_RAY: &str = "cf-ray";
pub const CF_IPCOUNTRY: &str = "cf-ipcountry";
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

fn header(headers: &HeaderMap, name: impl axum::http::header::AsHeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Best-effort client address: the tunnel's connecting-ip header, then the
/// first hop of `X-Forwarded-For`, then the socket peer, then `"Unknown"`.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    header(headers, CF_CONNECTING_IP)
        .or_else(|| {
            header(headers, X_FORWARDED_FOR).and_then(|list| {
                list.split(',')
                    .next()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "Unknown".to_string())
}

fn peer_addr(parts: &Parts) -> Option<SocketAddr> {
    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr)
}

/// Extracts just the best-effort client address.
pub struct ClientAddr(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ClientAddr {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientAddr(client_ip(&parts.headers, peer_addr(parts))))
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ClientInfo {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;
        Ok(ClientInfo {
            ip: client_ip(headers, peer_addr(parts)),
            host: header(headers, HOST),
            origin: header(headers, ORIGIN),
            user_agent: header(headers, USER_AGENT),
            cf_ray: header(headers, CF_RAY),
            cf_country: header(headers, CF_IPCOUNTRY),
            cf_connecting_ip: header(headers, CF_CONNECTING_IP),
        })
    }
}

/// Body accepted either as JSON or as a url-encoded form, chosen by
/// `Content-Type`. Any other (or absent) content type yields `T::default()`
/// so field validation, not body parsing, decides the outcome.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = header(req.headers(), CONTENT_TYPE).unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| bad_body(e.body_text()))?;
            Ok(JsonOrForm(body))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(body) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| bad_body(e.body_text()))?;
            Ok(JsonOrForm(body))
        } else {
            Ok(JsonOrForm(T::default()))
        }
    }
}

fn bad_body(detail: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "success": false,
            "message": "Malformed request body.",
            "error": detail
        })),
    )
        .into_response()
}
