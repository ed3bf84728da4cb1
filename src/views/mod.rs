//! HTML views
//!
//! Pure projections from movie records to markup. Nothing here performs I/O.

pub mod about;
pub mod detail;
pub mod format;
pub mod layout;
pub mod listing;

pub use layout::{SearchBar, error_page, message_page, page};

/// Local image shown when upstream has no poster
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Builds image URLs against the upstream image host
#[derive(Clone, Debug)]
pub struct Images {
    base_url: String,
}

impl Images {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Card-sized poster, placeholder when absent
    pub fn poster(&self, path: Option<&str>) -> String {
        self.sized("w500", path)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }

    /// Full-resolution image, `None` when absent
    pub fn original(&self, path: Option<&str>) -> Option<String> {
        self.sized("original", path)
    }

    fn sized(&self, size: &str, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|p| format!("{}/{}{}", self.base_url, size, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_urls() {
        let images = Images::new("https://image.tmdb.org/t/p");
        assert_eq!(
            images.poster(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(images.poster(None), PLACEHOLDER_IMAGE);
        assert_eq!(images.poster(Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(images.original(None), None);
    }
}
