pub mod health;
pub mod movies;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::domain::MetadataError;
use crate::infrastructure::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Movies
        .route("/movies", get(movies::list_movies))
        .route("/movies/:id", get(movies::get_movie))
        .route("/search", get(movies::search_movies))
}

/// JSON error body; upstream 4xx/5xx codes pass through, everything else is a bad gateway
pub(crate) fn upstream_error(e: MetadataError) -> Response {
    let status = e
        .status()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .filter(|s| s.is_client_error() || s.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY);

    (status, Json(json!({ "error": e.to_string() }))).into_response()
}
