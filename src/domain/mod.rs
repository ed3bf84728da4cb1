//! Domain layer - Pure movie abstractions
//!
//! This layer contains NO web framework dependencies (no Axum).
//! Only the movie records, the genre table, the source trait and error types.

pub mod errors;
pub mod genres;
pub mod movie;
pub mod source;

pub use errors::MetadataError;
pub use movie::*;
pub use source::MovieSource;
