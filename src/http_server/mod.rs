//! # HTTP Server Module
//!
//! Transport adapter for the validation engine.
//!
//! # Endpoints
//!
//! - `POST /validate` - Validate and normalize a payload (200 valid, 400 invalid)
//! - `GET /health` - Health check

pub mod config;
pub mod health_routes;
pub mod server;
pub mod validate_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
