//! # robodb HTTP Server Module
//!
//! Thin dispatch layer: parses requests, calls one store operation, and
//! serializes the result.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET|POST /robots` - List (filter by `model`, `tech`) / create
//! - `GET|PUT|DELETE /robots/{code}` - Read / replace / delete
//! - `GET /references` - Current reference catalog
//! - `POST /references/update` - Additive catalog merge

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod reference_routes;
pub mod robot_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{build_router, HttpServer};
