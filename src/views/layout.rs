//! Page shell: head, navigation bar and the search control markup.

use super::format::html_escape;
use crate::services::search_control::{Panel, SearchControl};
use crate::services::search_history::KeyValueStore;

/// Everything the navigation bar needs to draw the search control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBar {
    pub history: Vec<String>,
    pub panel: Panel,
}

impl SearchBar {
    pub fn from_control<S: KeyValueStore>(control: &SearchControl<S>) -> Self {
        Self {
            history: control.history().entries().to_vec(),
            panel: control.panel(),
        }
    }

    fn render(&self) -> String {
        let history = if self.history.is_empty() {
            String::new()
        } else {
            let open = if matches!(self.panel, Panel::History(_)) {
                " open"
            } else {
                ""
            };
            let items: String = self
                .history
                .iter()
                .map(|term| {
                    format!(
                        r#"<li><form action="/search" method="post"><input type="hidden" name="source" value="history"><button type="submit" name="term" value="{term}" class="history-entry"><span class="icon">&#8634;</span>{term}</button></form></li>"#,
                        term = html_escape(term)
                    )
                })
                .collect();
            format!(
                r#"
            <div class="dropdown history-dropdown{open}">
                <div class="dropdown-header">
                    <span>Recent Searches</span>
                    <form action="/history/clear" method="post"><button type="submit" class="history-clear">Clear</button></form>
                </div>
                <ul>{items}</ul>
            </div>"#
            )
        };

        // Always present so the browser can show it while the user types
        let (typed, suggestion_open) = match &self.panel {
            Panel::Suggestion(text) => (html_escape(text), " open"),
            _ => (String::new(), ""),
        };

        format!(
            r#"<div class="search-control">
            <form id="search-form" class="search-form" action="/search" method="post">
                <span class="icon">&#128269;</span>
                <input type="text" name="term" value="{typed}" placeholder="Search movies..." autocomplete="off">
                <button type="reset" class="search-clear" aria-label="Clear search">&times;</button>
                <button type="submit" class="search-submit" aria-label="Search">Search</button>
            </form>{history}
            <div class="dropdown suggestion-panel{suggestion_open}">
                <div class="dropdown-header"><span>Search for "<span class="suggestion-text">{typed}</span>"</span></div>
                <button type="submit" form="search-form" name="source" value="suggestion" class="suggestion-entry"><span class="icon">&#127902;</span>Show results for "<span class="suggestion-text">{typed}</span>"</button>
            </div>
        </div>"#
        )
    }
}

/// Base HTML document with the navigation bar.
pub fn page(title: &str, search: &SearchBar, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - IMDb Clone</title>
    <link rel="stylesheet" href="/static/style.css">
    <script src="/static/search.js" defer></script>
</head>
<body>
    <header class="navbar">
        <nav>
            <a href="/" class="brand"><span class="brand-mark">IMDb</span><span>IMDb Clone</span></a>
            <div class="nav-right">
                <ul class="nav-links">
                    <li><a href="/">Home</a></li>
                    <li><a href="/about">About</a></li>
                </ul>
                {search}
            </div>
        </nav>
    </header>
    <main>
        {content}
    </main>
</body>
</html>"#,
        title = html_escape(title),
        search = search.render(),
    )
}

/// Generic failure state: a heading plus the error's description
pub fn error_page(search: &SearchBar, heading: &str, description: &str) -> String {
    let content = format!(
        r#"<div class="error-state">
            <h1>{}</h1>
            <p>{}</p>
        </div>"#,
        html_escape(heading),
        html_escape(description)
    );
    page(heading, search, &content)
}

/// Placeholder state for a request that could not be made at all
pub fn message_page(search: &SearchBar, title: &str, message: &str) -> String {
    let content = format!(
        r#"<div class="empty-state"><p>{}</p></div>"#,
        html_escape(message)
    );
    page(title, search, &content)
}
