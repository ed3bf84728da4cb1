//! Application state containing the movie source and shared settings

use std::sync::Arc;

use crate::domain::MovieSource;
use crate::views::Images;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream metadata source
    pub source: Arc<dyn MovieSource>,
    /// Image URL builder
    pub images: Images,
}

impl AppState {
    pub fn new(source: Arc<dyn MovieSource>, images: Images) -> Self {
        Self { source, images }
    }
}
