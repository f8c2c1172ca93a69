//! # HTTP Server
//!
//! Combines the robot, reference and health routers over one shared store.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event};
use crate::store::RobotStore;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::reference_routes::reference_routes;
use super::robot_routes::robot_routes;

/// HTTP server for robodb
pub struct HttpServer {
    config: HttpServerConfig,
    store: Arc<RobotStore>,
    router: Router,
}

impl HttpServer {
    /// Create a server over an empty store with the default catalog
    pub fn new(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(RobotStore::new()))
    }

    /// Create a server over an existing store
    pub fn with_store(config: HttpServerConfig, store: Arc<RobotStore>) -> Self {
        let router = build_router(&config, store.clone());
        Self {
            config,
            store,
            router,
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared store handle
    pub fn store(&self) -> Arc<RobotStore> {
        self.store.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        let robots = self.store.len().to_string();
        log_event_with_fields(
            Event::Serving,
            &[("addr", addr.as_str()), ("robots", robots.as_str())],
        );

        axum::serve(listener, self.router).await
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &HttpServerConfig, store: Arc<RobotStore>) -> Router {
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
        .merge(robot_routes(store.clone()))
        .merge(reference_routes(store))
        .layer(cors)
}
