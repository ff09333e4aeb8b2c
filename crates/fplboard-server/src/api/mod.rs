mod league;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use fplboard_fpl::FplClient;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<FplClient>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Every fatal condition surfaces the same way: HTTP 400 with a single
/// explanatory `{ "error": message }` body. There is no partial-success
/// status distinct from full success.
fn error_response(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_owned(),
        }),
    )
        .into_response()
}

/// The consumers are static frontends served from arbitrary origins, so
/// every route is CORS-open; preflights are answered by the layer itself.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/league/aggregate", post(league::aggregate))
        .route("/api/v1/league/export", post(league::export_csv))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
