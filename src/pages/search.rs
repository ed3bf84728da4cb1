use axum::{
    Form,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::{error_status, search_bar};
use crate::infrastructure::{AppState, CookieStore};
use crate::services::search_control::{SearchControl, SearchEvent};
use crate::services::search_history::SearchHistory;
use crate::views::format::html_escape;
use crate::views::listing::movie_grid;
use crate::views::{error_page, message_page, page};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}

pub async fn search_results(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
    jar: CookieJar,
) -> Response {
    let search = search_bar(&jar);

    let Some(query) = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
    else {
        return Html(message_page(&search, "Search", "No search query provided")).into_response();
    };

    match state.source.search_by_term(query).await {
        Ok(movies) => {
            tracing::info!("Search {:?} returned {} movies", query, movies.len());
            let content = format!(
                r#"<h1 class="results-heading">Results for "{}"</h1>{}"#,
                html_escape(query),
                movie_grid(&movies, &state.images)
            );
            Html(page(query, &search, &content)).into_response()
        }
        Err(e) => {
            tracing::error!("Search error: {}", e);
            (
                error_status(&e),
                Html(error_page(
                    &search,
                    "Error loading search results",
                    &e.to_string(),
                )),
            )
                .into_response()
        }
    }
}

/// Posted by the search box, a history entry or the suggestion button
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub term: String,
    pub source: Option<String>,
}

pub async fn submit_search(jar: CookieJar, Form(form): Form<SearchForm>) -> Response {
    let mut control = SearchControl::new(SearchHistory::load(CookieStore::new(jar)));
    control.handle(SearchEvent::Focus);

    let event = match form.source.as_deref() {
        Some("history") => SearchEvent::SelectHistory(form.term),
        Some("suggestion") => {
            control.handle(SearchEvent::Input(form.term));
            SearchEvent::SelectSuggestion
        }
        _ => {
            control.handle(SearchEvent::Input(form.term));
            SearchEvent::Submit
        }
    };

    match control.handle(event) {
        Some(navigation) => {
            let jar = control.into_history().into_store().into_jar();
            (jar, Redirect::to(&navigation.location)).into_response()
        }
        // Blank term: stay where we are
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn clear_history(jar: CookieJar, headers: HeaderMap) -> Response {
    let mut history = SearchHistory::load(CookieStore::new(jar));
    history.clear();
    let jar = history.into_store().into_jar();
    (jar, Redirect::to(&back_to(&headers))).into_response()
}

/// Path and query of the referring page, or the home page
fn back_to(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|r| url::Url::parse(r).ok())
        .map(|u| match u.query() {
            Some(q) => format!("{}?{}", u.path(), q),
            None => u.path().to_string(),
        })
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_back_to_keeps_only_path_and_query() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::REFERER,
            HeaderValue::from_static("http://localhost:3000/search?query=heat"),
        );
        assert_eq!(back_to(&headers), "/search?query=heat");
        assert_eq!(back_to(&HeaderMap::new()), "/");
    }
}
