use serde::Deserialize;

/// Health check endpoint configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    /// Whether the health check is mounted
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Mount path, must start with `/`
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_path(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "/health".to_string()
}
