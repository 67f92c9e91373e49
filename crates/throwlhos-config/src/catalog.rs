use serde::Deserialize;

/// Status catalog endpoints
///
/// `GET {path}` lists every thrower, `GET {path}/{thrower}` answers with
/// that thrower's descriptor.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Whether the catalog routes are mounted
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Mount path, must start with `/`
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for CatalogConfig {
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
    "/statuses".to_string()
}
