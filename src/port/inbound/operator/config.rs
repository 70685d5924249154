//! Configuration projections for operator-facing adapters.

use crate::error::Result;

/// Full configuration projection for operator-facing output.
#[derive(Debug, Clone)]
pub struct ConfigView {
    pub log_level: String,
    pub log_format: String,
    pub render_format: String,
    /// Argument overrides from the `[arguments]` table, sorted by name.
    pub arguments: Vec<(String, String)>,
    /// Names in `[arguments]` that match no declared argument.
    pub unknown_arguments: Vec<String>,
}

/// Configuration inspection use-cases.
pub trait ConfigurationOperator: Send + Sync {
    /// Parse and validate configuration, returning the effective view.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate configuration without producing a view.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    fn validate_config(&self, config_toml: &str) -> Result<()> {
        self.show_config(config_toml).map(|_| ())
    }
}
