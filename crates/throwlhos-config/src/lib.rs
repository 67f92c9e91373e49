#![allow(clippy::must_use_candidate)]

pub mod catalog;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use catalog::*;
pub use health::*;
pub use server::*;
pub use telemetry::*;

/// Top-level throwlhos configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
