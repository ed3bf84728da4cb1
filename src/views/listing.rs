//! Summary card grid

use super::Images;
use super::format::{RatingTier, html_escape, rating_label, release_year};
use crate::domain::MovieSummary;
use crate::domain::genres::primary_genre;

/// One clickable card linking to the movie's detail page.
pub fn movie_card(movie: &MovieSummary, images: &Images) -> String {
    let title = if movie.title.trim().is_empty() {
        "Unknown Title"
    } else {
        movie.title.as_str()
    };
    let overview = if movie.overview.trim().is_empty() {
        "No description available."
    } else {
        movie.overview.as_str()
    };
    let rating = rating_label(movie.vote_average);
    let tier = RatingTier::from_score(movie.vote_average);

    let genre_badge = primary_genre(&movie.genre_ids)
        .map(|name| format!(r#"<div class="genre-badge">{}</div>"#, html_escape(name)))
        .unwrap_or_default();

    format!(
        r#"<a class="movie-card" href="/movies/{id}">
    <div class="rating-badge {tier}">{rating}</div>
    {genre_badge}
    <div class="poster">
        <img src="{poster}" alt="{title} poster" loading="lazy">
        <div class="poster-overlay">
            <p class="overview">{overview}</p>
            <span class="details-button">View Details</span>
        </div>
    </div>
    <div class="card-body">
        <h3 class="card-title">{title}</h3>
        <div class="card-meta">
            <span class="year">{year}</span>
            <span class="rating">&#9733; {rating}</span>
        </div>
    </div>
</a>"#,
        id = movie.id,
        tier = tier.css_class(),
        poster = html_escape(&images.poster(movie.poster_path.as_deref())),
        title = html_escape(title),
        overview = html_escape(overview),
        year = release_year(&movie.release_date),
    )
}

/// Card grid, or an explicit placeholder when there is nothing to show
pub fn movie_grid(movies: &[MovieSummary], images: &Images) -> String {
    if movies.is_empty() {
        return r#"<p class="empty-state">No movies found</p>"#.to_string();
    }

    let cards: String = movies.iter().map(|m| movie_card(m, images)).collect();
    format!(r#"<div class="movie-grid">{}</div>"#, cards)
}

/// Upstream list categories offered as tabs on the home page
pub const CATEGORIES: [(&str, &str); 4] = [
    ("popular", "Popular"),
    ("top_rated", "Top Rated"),
    ("now_playing", "Now Playing"),
    ("upcoming", "Upcoming"),
];

pub fn category_tabs(active: &str) -> String {
    let tabs: String = CATEGORIES
        .iter()
        .map(|(key, label)| {
            let class = if *key == active { "tab active" } else { "tab" };
            format!(r#"<a class="{}" href="/?genre={}">{}</a>"#, class, key, label)
        })
        .collect();
    format!(r#"<nav class="category-tabs">{}</nav>"#, tabs)
}
