//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use throwlhos_config::{Config, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

#[allow(dead_code)]
impl ConfigBuilder {
    /// Create a new builder with every endpoint enabled
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                telemetry: None,
            },
        }
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Disable the catalog endpoints
    pub fn without_catalog(mut self) -> Self {
        self.config.server.catalog.enabled = false;
        self
    }

    /// Mount the catalog endpoints under another path
    pub fn with_catalog_path(mut self, path: &str) -> Self {
        self.config.server.catalog.path = path.to_owned();
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
