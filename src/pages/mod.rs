//! Page controllers
//!
//! One handler per browser route. Each does at most one upstream fetch and
//! hands the result to a view; failures become an HTML error state.

pub mod about;
pub mod detail;
pub mod home;
pub mod search;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use crate::domain::MetadataError;
use crate::infrastructure::{AppState, CookieStore};
use crate::services::search_control::SearchControl;
use crate::services::search_history::SearchHistory;
use crate::views::SearchBar;

pub fn pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/movies/:id", get(detail::show_movie))
        .route(
            "/search",
            get(search::search_results).post(search::submit_search),
        )
        .route("/history/clear", post(search::clear_history))
        .route("/about", get(about::about))
}

/// Search control as it looks on a freshly loaded page
pub(crate) fn search_bar(jar: &CookieJar) -> SearchBar {
    let control = SearchControl::new(SearchHistory::load(CookieStore::new(jar.clone())));
    SearchBar::from_control(&control)
}

/// Status of an error page: upstream's 404 stays a 404, anything else is a bad gateway
pub(crate) fn error_status(e: &MetadataError) -> StatusCode {
    if e.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_GATEWAY
    }
}
