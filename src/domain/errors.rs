//! Domain error types
//!
//! These errors are framework-agnostic and represent failures talking to the
//! upstream metadata service.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// Upstream answered with a non-success HTTP status
    Status(u16),
    /// The request never produced a response
    Request(String),
    /// The response body was not the expected JSON
    Parse(String),
    /// The HTTP client could not be built
    Client(String),
}

impl MetadataError {
    /// Upstream status code, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            MetadataError::Status(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::Status(code) => write!(f, "Failed to fetch data: {}", code),
            MetadataError::Request(msg) => write!(f, "Failed to send request: {}", msg),
            MetadataError::Parse(msg) => write!(f, "Failed to parse JSON: {}", msg),
            MetadataError::Client(msg) => write!(f, "Failed to build client: {}", msg),
        }
    }
}

impl std::error::Error for MetadataError {}

// Conversion from reqwest errors (used in the integrations layer)
impl From<reqwest::Error> for MetadataError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            MetadataError::Parse(e.to_string())
        } else {
            MetadataError::Request(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code_in_message() {
        let err = MetadataError::Status(404);
        assert_eq!(err.to_string(), "Failed to fetch data: 404");
        assert!(err.is_not_found());
        assert_eq!(MetadataError::Parse("eof".into()).status(), None);
    }
}
