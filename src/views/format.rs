//! Display helpers shared by the listing and detail views

use chrono::{Datelike, NaiveDate};

/// Escape text for HTML element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Colour band of a rating badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    High,
    MediumHigh,
    MediumLow,
    Low,
}

impl RatingTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            RatingTier::High
        } else if score >= 6.0 {
            RatingTier::MediumHigh
        } else if score >= 4.0 {
            RatingTier::MediumLow
        } else {
            RatingTier::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RatingTier::High => "rating-high",
            RatingTier::MediumHigh => "rating-medium-high",
            RatingTier::MediumLow => "rating-medium-low",
            RatingTier::Low => "rating-low",
        }
    }
}

/// One decimal, or "N/A" for an unrated movie
pub fn rating_label(vote_average: f64) -> String {
    if vote_average == 0.0 || !vote_average.is_finite() {
        "N/A".to_string()
    } else {
        format!("{:.1}", vote_average)
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Release year, "N/A" when the date is empty or unreadable
pub fn release_year(release_date: &str) -> String {
    parse_date(release_date)
        .map(|d| d.year().to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// "July 16, 2010"
pub fn format_release_date(release_date: &str) -> Option<String> {
    parse_date(release_date).map(|d| d.format("%B %-d, %Y").to_string())
}

/// "2h 28m"; unknown or zero runtimes have no label
pub fn format_runtime(minutes: Option<u32>) -> Option<String> {
    match minutes {
        Some(m) if m > 0 => Some(format!("{}h {}m", m / 60, m % 60)),
        _ => None,
    }
}

/// Thousands separators: 1234567 -> "1,234,567"
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole US dollars: 160000000 -> "$160,000,000"
pub fn format_currency(amount: u64) -> String {
    format!("${}", format_count(amount))
}

/// Host part of a homepage URL, for link text
pub fn homepage_host(homepage: &str) -> Option<String> {
    url::Url::parse(homepage)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
}
