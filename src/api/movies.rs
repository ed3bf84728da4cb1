use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use super::upstream_error;
use crate::infrastructure::AppState;
use crate::pages::home::DEFAULT_CATEGORY;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/movies",
    params(
        ("category" = Option<String>, Query, description = "Upstream list, defaults to popular")
    ),
    responses(
        (status = 200, description = "Page 1 of the category", body = [crate::domain::MovieSummary]),
        (status = 502, description = "Upstream failure")
    )
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Response {
    let category = params
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CATEGORY);

    match state.source.list_by_category(category).await {
        Ok(movies) => (StatusCode::OK, Json(movies)).into_response(),
        Err(e) => upstream_error(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(
        ("id" = u64, Path, description = "Upstream movie id")
    ),
    responses(
        (status = 200, description = "Full movie record", body = crate::domain::MovieDetail),
        (status = 404, description = "Unknown or non-numeric id")
    )
)]
pub async fn get_movie(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    // Upstream ids are numeric; anything else cannot exist
    let Ok(id) = id.trim().parse::<u64>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Movie not found" })),
        )
            .into_response();
    };

    match state.source.get_by_id(id).await {
        Ok(movie) => (StatusCode::OK, Json(movie)).into_response(),
        Err(e) => upstream_error(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(
        ("query" = String, Query, description = "Search term")
    ),
    responses(
        (status = 200, description = "Matching movies", body = [crate::domain::MovieSummary]),
        (status = 400, description = "Missing query")
    )
)]
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let Some(query) = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No search query provided" })),
        )
            .into_response();
    };

    match state.source.search_by_term(query).await {
        Ok(movies) => (StatusCode::OK, Json(movies)).into_response(),
        Err(e) => upstream_error(e),
    }
}
