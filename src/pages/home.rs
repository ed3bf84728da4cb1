use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::{error_status, search_bar};
use crate::infrastructure::AppState;
use crate::views::listing::{category_tabs, movie_grid};
use crate::views::{error_page, page};

pub const DEFAULT_CATEGORY: &str = "popular";

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub genre: Option<String>,
}

pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HomeQuery>,
    jar: CookieJar,
) -> Response {
    let category = params
        .genre
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .unwrap_or(DEFAULT_CATEGORY);
    let search = search_bar(&jar);

    match state.source.list_by_category(category).await {
        Ok(movies) => {
            tracing::info!("Listed {} movies for category {}", movies.len(), category);
            let content = format!(
                "{}{}",
                category_tabs(category),
                movie_grid(&movies, &state.images)
            );
            Html(page("Home", &search, &content)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching data: {}", e);
            (
                error_status(&e),
                Html(error_page(&search, "Error loading movies", &e.to_string())),
            )
                .into_response()
        }
    }
}
