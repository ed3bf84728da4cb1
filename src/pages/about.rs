use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;

use super::search_bar;
use crate::views::about::about_content;
use crate::views::page;

pub async fn about(jar: CookieJar) -> Html<String> {
    Html(page("About", &search_bar(&jar), &about_content()))
}
