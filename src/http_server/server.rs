//! # HTTP Server
//!
//! Thin transport adapter around the validation engine.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::validate_routes::{validate_routes, ValidateState};
use crate::observability::{log_event_with_fields, Event};
use crate::pipeline::Validator;

/// HTTP server for the validation endpoint
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default(), Validator::new())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, validator: Validator) -> Self {
        let router = Self::build_router(&config, validator);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, validator: Validator) -> Router {
        let state = Arc::new(ValidateState::new(validator));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(validate_routes(state))
            .layer(DefaultBodyLimit::max(config.max_body_bytes))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // A failed signal handler leaves the server running until killed
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9090);
        let server = HttpServer::with_config(config, Validator::new());
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds_with_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config, Validator::new()).router();
    }
}
