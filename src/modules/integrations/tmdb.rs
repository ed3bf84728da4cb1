//! TMDB (The Movie Database) integration
//!
//! Implements [`MovieSource`] over the TMDB v3 REST API. Every request carries
//! the configured bearer token, asks for `en-US` and only ever reads page 1.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::domain::{MetadataError, MovieDetail, MoviePage, MovieSource, MovieSummary};

const LANGUAGE: &str = "en-US";
const PAGE: &str = "1";

pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self, MetadataError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| MetadataError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.tmdb_api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Single attempt GET; any non-success status is an error before parsing
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MetadataError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .query(params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "TMDB returned an error status");
            return Err(MetadataError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| MetadataError::Parse(e.to_string()))
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn list_by_category(&self, category: &str) -> Result<Vec<MovieSummary>, MetadataError> {
        let path = format!("/movie/{}", urlencoding::encode(category));
        let page: MoviePage = self
            .get_json(&path, &[("language", LANGUAGE), ("page", PAGE)])
            .await?;
        Ok(page.results)
    }

    async fn get_by_id(&self, id: u64) -> Result<MovieDetail, MetadataError> {
        let path = format!("/movie/{}", id);
        self.get_json(&path, &[("language", LANGUAGE)]).await
    }

    async fn search_by_term(&self, term: &str) -> Result<Vec<MovieSummary>, MetadataError> {
        let page: MoviePage = self
            .get_json(
                "/search/movie",
                &[
                    ("query", term),
                    ("include_adult", "false"),
                    ("language", LANGUAGE),
                    ("page", PAGE),
                ],
            )
            .await?;
        Ok(page.results)
    }
}
