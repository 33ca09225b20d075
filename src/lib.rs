use axum::handler::HandlerWithoutStateExt;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::routing::{get, get_service, post};
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod submissions;

use state::AppState;

/// Any origin is accepted and echoed back, with credentials allowed.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
}

fn router(state: &AppState) -> Router<Arc<AppState>> {
    let static_files = ServeDir::new(&state.config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(routes::fallback::not_found.into_service());

    Router::new()
        .route("/", get_service(ServeFile::new(state.config.index_path())))
        .route("/health", get(routes::health::health))
        .route("/debug", get(routes::debug::debug))
        .route("/system-info", get(routes::system_info::system_info))
        .route("/test", get(routes::tunnel_test::tunnel_test))
        .route(
            "/save-login",
            post(routes::login::save_login).options(routes::login::preflight),
        )
        .fallback_service(static_files)
}

fn finish(router: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(CatchPanicLayer::custom(error::panic_response)),
        )
        .with_state(state)
}

/// Builds the full application: routes, static assets, 404 fallback,
/// CORS and the panic-to-500 responder.
pub fn app(state: Arc<AppState>) -> Router {
    finish(router(&state), state)
}
