//! Server configuration.
//!
//! Loaded via the `config` crate from environment variables. Leptos site
//! options (address, output name, site root) come from
//! `[package.metadata.leptos]` instead.

use serde::Deserialize;

/// Settings for the asset server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Directory holding the compiled WASM bundle, served under `/pkg`.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}

fn default_assets_dir() -> String {
    "target/site/pkg".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
