use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint path is malformed or two enabled
    /// endpoints share a path
    pub fn validate(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        let catalog = &self.server.catalog;

        if health.enabled {
            validate_path("server.health.path", &health.path)?;
        }

        if catalog.enabled {
            validate_path("server.catalog.path", &catalog.path)?;
        }

        if health.enabled && catalog.enabled && health.path == catalog.path {
            anyhow::bail!("server.health.path and server.catalog.path must differ (both are `{}`)", health.path);
        }

        Ok(())
    }
}

fn validate_path(field: &str, path: &str) -> anyhow::Result<()> {
    if !path.starts_with('/') {
        anyhow::bail!("{field} must start with '/': `{path}`");
    }

    if path.len() > 1 && path.ends_with('/') {
        anyhow::bail!("{field} must not end with '/': `{path}`");
    }

    Ok(())
}
