use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use super::{error_status, search_bar};
use crate::infrastructure::AppState;
use crate::views::detail::movie_detail;
use crate::views::{error_page, message_page, page};

pub async fn show_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> Response {
    let search = search_bar(&jar);

    // Upstream ids are numeric; anything else cannot exist
    let Ok(id) = id.trim().parse::<u64>() else {
        return (
            StatusCode::NOT_FOUND,
            Html(message_page(&search, "Movie not found", "Movie not found")),
        )
            .into_response();
    };

    match state.source.get_by_id(id).await {
        Ok(movie) => {
            let content = movie_detail(&movie, &state.images);
            Html(page(&movie.summary.title, &search, &content)).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching movie {}: {}", id, e);
            (
                error_status(&e),
                Html(error_page(&search, "Error loading movie", &e.to_string())),
            )
                .into_response()
        }
    }
}
