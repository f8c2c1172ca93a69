//! HTTP Server Configuration
//!
//! The listener and CORS part of `robodb.json`. The keys sit at the top level
//! of the file next to `seed_file` and `log_level`:
//!
//! ```json
//! { "host": "127.0.0.1", "port": 8080, "cors_origins": ["http://localhost:3000"] }
//! ```

use serde::{Deserialize, Serialize};

/// Where the robot API listens and which browser origins may call it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Interface to bind; "0.0.0.0" exposes the API on every interface
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port, overridable with `serve --port`. Must be non-zero.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to call the API from a browser. Empty allows any.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Defaults with a different listen port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// `host:port` as passed to the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(9000);
        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_cors_origins_from_json() {
        let config: HttpServerConfig =
            serde_json::from_str(r#"{"cors_origins": ["http://localhost:3000"]}"#).unwrap();
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_string()]);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_partial_json() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 3000}"#).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
    }
}
