//! Movie source trait definition
//!
//! Page controllers and API handlers depend on this contract.
//! The HTTP implementation lives in the integrations module.

use async_trait::async_trait;

use super::{MetadataError, MovieDetail, MovieSummary};

/// Read-only access to the upstream metadata service
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// List page 1 of a category such as `popular` or `top_rated`
    async fn list_by_category(&self, category: &str) -> Result<Vec<MovieSummary>, MetadataError>;

    /// Fetch one movie's full record
    async fn get_by_id(&self, id: u64) -> Result<MovieDetail, MetadataError>;

    /// Keyword search, page 1
    async fn search_by_term(&self, term: &str) -> Result<Vec<MovieSummary>, MetadataError>;
}
