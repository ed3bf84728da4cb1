// Server module - Builds the router and picks a port for the binary

use axum::Router;
use axum::http::HeaderValue;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::domain::MetadataError;
use crate::infrastructure::AppState;
use crate::pages;
use crate::tmdb::TmdbClient;
use crate::views::Images;

/// State backed by the live TMDB client
pub fn build_state(config: &Config) -> Result<AppState, MetadataError> {
    let client = TmdbClient::new(config)?;
    Ok(AppState::new(
        Arc::new(client),
        Images::new(config.tmdb_image_url.clone()),
    ))
}

/// Pages at the root, JSON under /api, assets under /static
pub fn build_router(state: AppState, config: &Config) -> Router {
    let mut cors_allowed_origins = Vec::new();
    for origin in &config.cors_allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => cors_allowed_origins.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api::api_router())
        .merge(pages::pages_router())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(cors_allowed_origins)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Find an available port starting from the preferred port on a specific IP
pub fn find_available_port_on_ip(preferred_port: u16, ip: &str) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind((ip, preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    (preferred_port.saturating_add(1)..preferred_port.saturating_add(100))
        .find(|&port| TcpListener::bind((ip, port)).is_ok())
}

/// Find an available port starting from the preferred port (0.0.0.0)
pub fn find_available_port(preferred_port: u16) -> Option<u16> {
    find_available_port_on_ip(preferred_port, "0.0.0.0")
}

/// Build everything from `config` and serve until the listener fails
pub async fn start_server(config: &Config) -> Result<(), String> {
    let state = build_state(config).map_err(|e| e.to_string())?;
    let app = build_router(state, config);

    // Find available port
    let port = find_available_port(config.port)
        .ok_or_else(|| format!("Failed to find available port near {}", config.port))?;

    if port != config.port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            config.port,
            port
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Server running at http://localhost:{}", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_port_falls_forward() {
        let held = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let busy = held.local_addr().unwrap().port();

        let port = find_available_port_on_ip(busy, "127.0.0.1").unwrap();
        assert_ne!(port, busy);
        assert!(port > busy);
    }
}
