//! Upstream metadata integrations

pub mod tmdb;

pub use tmdb::TmdbClient;
