//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Cookie-backed browser storage (cookie_store)
//! - HTTP server setup (server)
//! - Application state (state)

pub mod config;
pub mod cookie_store;
pub mod server;
pub mod state;

pub use cookie_store::CookieStore;
pub use state::AppState;
