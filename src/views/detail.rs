//! Single-movie layout
//!
//! Each optional field renders its own block or nothing; one missing field
//! never hides its neighbours.

use super::format::{
    format_count, format_currency, format_release_date, format_runtime, homepage_host,
    html_escape, rating_label,
};
use super::{Images, PLACEHOLDER_IMAGE};
use crate::domain::{MovieDetail, ProductionCompany};

pub fn movie_detail(movie: &MovieDetail, images: &Images) -> String {
    let summary = &movie.summary;
    let title = html_escape(&summary.title);

    let backdrop = images
        .original(movie.backdrop_path.as_deref())
        .map(|url| {
            format!(
                r#"<div class="backdrop"><img src="{}" alt="{} backdrop"></div>"#,
                html_escape(&url),
                title
            )
        })
        .unwrap_or_default();

    let poster = images
        .original(summary.poster_path.as_deref())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let tagline = movie
        .tagline()
        .map(|t| format!(r#"<p class="tagline">"{}"</p>"#, html_escape(t)))
        .unwrap_or_default();

    let mut info: Vec<String> = Vec::new();
    if let Some(date) = format_release_date(&summary.release_date) {
        info.push(format!("<span>{}</span>", date));
    }
    if let Some(runtime) = format_runtime(movie.runtime) {
        info.push(format!("<span>{}</span>", runtime));
    }
    if !movie.genres.is_empty() {
        let pills: String = movie
            .genres
            .iter()
            .map(|g| format!(r#"<span class="genre-pill">{}</span>"#, html_escape(&g.name)))
            .collect();
        info.push(format!(r#"<div class="genre-pills">{}</div>"#, pills));
    }
    let info_bar = info.join(r#"<span class="dot">&bull;</span>"#);

    let overview = if summary.overview.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<section class="overview"><h2>Overview</h2><p>{}</p></section>"#,
            html_escape(&summary.overview)
        )
    };

    format!(
        r#"<div class="movie-detail">
    {backdrop}
    <div class="detail-content">
        <div class="detail-poster">
            <img src="{poster}" alt="{title} poster">
        </div>
        <div class="detail-body">
            <h1>{title}</h1>
            {tagline}
            <div class="info-bar">{info_bar}</div>
            <div class="user-score">
                <div class="score-ring">{score}</div>
                <div>
                    <p class="score-label">User Score</p>
                    <p class="vote-count">{votes} votes</p>
                </div>
            </div>
            {overview}
            <section class="movie-info">
                <h2>Movie Info</h2>
                {stats}
            </section>
            {companies}
        </div>
    </div>
</div>"#,
        poster = html_escape(&poster),
        score = rating_label(summary.vote_average),
        votes = format_count(movie.vote_count),
        stats = movie_stats(movie),
        companies = production_companies(&movie.production_companies, images),
    )
}

fn stat(label: &str, value_html: &str) -> String {
    format!(
        r#"<div class="stat"><h3>{}</h3><p>{}</p></div>"#,
        html_escape(label),
        value_html
    )
}

fn movie_stats(movie: &MovieDetail) -> String {
    let mut stats = Vec::new();

    if let Some(status) = movie.status.as_deref().filter(|s| !s.is_empty()) {
        stats.push(stat("Status", &html_escape(status)));
    }
    if let Some(language) = movie.original_language_name() {
        stats.push(stat("Original Language", &html_escape(&language)));
    }
    if movie.budget > 0 {
        stats.push(stat("Budget", &format_currency(movie.budget)));
    }
    if movie.revenue > 0 {
        stats.push(stat("Revenue", &format_currency(movie.revenue)));
    }
    if let Some(imdb_id) = movie.imdb_id() {
        let link = format!(
            r#"<a href="https://www.imdb.com/title/{}" target="_blank" rel="noopener noreferrer">View on IMDB</a>"#,
            urlencoding::encode(imdb_id)
        );
        stats.push(stat("IMDB", &link));
    }
    if let Some(homepage) = movie.homepage()
        && let Some(host) = homepage_host(homepage)
    {
        let link = format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            html_escape(homepage),
            html_escape(&host)
        );
        stats.push(stat("Website", &link));
    }

    format!(r#"<div class="stats-grid">{}</div>"#, stats.concat())
}

fn production_companies(companies: &[ProductionCompany], images: &Images) -> String {
    if companies.is_empty() {
        return String::new();
    }

    let tiles: String = companies
        .iter()
        .map(|company| {
            let name = html_escape(&company.name);
            let logo = match images.original(company.logo_path.as_deref()) {
                Some(url) => format!(r#"<img src="{}" alt="{}">"#, html_escape(&url), name),
                None => {
                    let initial = company.name.chars().next().map(String::from).unwrap_or_default();
                    format!(r#"<span class="company-initial">{}</span>"#, html_escape(&initial))
                }
            };
            format!(r#"<div class="company">{}<p>{}</p></div>"#, logo, name)
        })
        .collect();

    format!(
        r#"<section class="production"><h2>Production</h2><div class="company-grid">{}</div></section>"#,
        tiles
    )
}
