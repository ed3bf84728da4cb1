use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Upstream sends `null` as often as it omits a field; both become the default.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Abbreviated movie record used in grid listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub release_date: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub genre_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SpokenLanguage {
    #[serde(default, deserialize_with = "null_to_default")]
    pub iso_639_1: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub english_name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductionCompany {
    pub id: u64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

/// Full movie record used on a single-movie page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub budget: u64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub revenue: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub vote_count: u64,
}

impl MovieDetail {
    /// Tagline, when upstream sent a non-blank one
    pub fn tagline(&self) -> Option<&str> {
        non_blank(self.tagline.as_deref())
    }

    pub fn homepage(&self) -> Option<&str> {
        non_blank(self.homepage.as_deref())
    }

    pub fn imdb_id(&self) -> Option<&str> {
        non_blank(self.imdb_id.as_deref())
    }

    /// English name of the original language, falling back to its code
    pub fn original_language_name(&self) -> Option<String> {
        let code = non_blank(self.original_language.as_deref())?;
        let name = self
            .spoken_languages
            .iter()
            .find(|lang| lang.iso_639_1 == code)
            .map(|lang| lang.english_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(code);
        Some(name.to_string())
    }
}

/// Upstream list envelope; only `results` is consumed
#[derive(Debug, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_tolerates_nulls_and_missing_fields() {
        let summary: MovieSummary = serde_json::from_value(json!({
            "id": 7,
            "title": null,
            "poster_path": null,
            "vote_average": 6.5
        }))
        .unwrap();

        assert_eq!(summary.id, 7);
        assert_eq!(summary.title, "");
        assert_eq!(summary.release_date, "");
        assert!(summary.poster_path.is_none());
        assert!(summary.genre_ids.is_empty());
    }

    #[test]
    fn test_detail_flattens_summary_fields() {
        let detail: MovieDetail = serde_json::from_value(json!({
            "id": 27205,
            "title": "Inception",
            "release_date": "2010-07-15",
            "runtime": 148,
            "budget": 160000000,
            "homepage": "",
            "original_language": "en",
            "spoken_languages": [
                {"iso_639_1": "en", "english_name": "English", "name": "English"}
            ],
            "genres": [{"id": 28, "name": "Action"}]
        }))
        .unwrap();

        assert_eq!(detail.summary.title, "Inception");
        assert_eq!(detail.runtime, Some(148));
        assert_eq!(detail.homepage(), None);
        assert_eq!(detail.original_language_name().as_deref(), Some("English"));
        assert_eq!(detail.genres[0].name, "Action");
    }

    #[test]
    fn test_original_language_falls_back_to_code() {
        let detail: MovieDetail = serde_json::from_value(json!({
            "id": 1,
            "original_language": "ja",
            "spoken_languages": []
        }))
        .unwrap();

        assert_eq!(detail.original_language_name().as_deref(), Some("ja"));
    }
}
