//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Configuration is loaded from a TOML
//! file; argument overrides can additionally come from environment
//! variables named `TRT_LAUNCH_ARG_<NAME>` (a `.env` file is honoured).
//!
//! # Example
//!
//! ```no_run
//! use tensor_rt_launch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("tensor-rt-launch.toml")?;
//!     config.logging.init();
//!     let overrides = config.argument_overrides();
//!     println!("{} overrides", overrides.len());
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::application::execution::overrides::Overrides;
use crate::application::launch::declarator::ARGUMENT_NAMES;
use crate::error::{ConfigError, Result};
use crate::port::inbound::operator::launch::RenderFormat;

/// Prefix of environment variables that override launch arguments.
pub const ENV_ARGUMENT_PREFIX: &str = "TRT_LAUNCH_ARG_";

/// Plan output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Format used by `plan` when no `--format` flag is given.
    #[serde(default)]
    pub format: RenderFormat,
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Plan output configuration.
    #[serde(default)]
    pub render: RenderConfig,

    /// Argument overrides applied before environment and CLI overrides.
    ///
    /// Values are strings exactly as the plugin will receive them, so
    /// booleans are written `"True"` / `"False"`.
    #[serde(default)]
    pub arguments: BTreeMap<String, String>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse `config_toml` when present, defaults otherwise.
    ///
    /// # Errors
    ///
    /// See [`Config::parse_toml`].
    pub fn from_optional_toml(config_toml: Option<&str>) -> Result<Self> {
        match config_toml {
            Some(content) => Self::parse_toml(content),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!(
                    "expected \"pretty\" or \"json\", got \"{}\"",
                    self.logging.format
                ),
            }
            .into());
        }
        if let Some(name) = self.arguments.keys().find(|name| name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "arguments",
                reason: format!("argument name '{name}' is empty"),
            }
            .into());
        }
        Ok(())
    }

    /// Names in `[arguments]` that match no declared launch argument.
    ///
    /// These are not rejected: resolution ignores them, as the
    /// orchestration runtime does.
    #[must_use]
    pub fn unknown_arguments(&self) -> Vec<String> {
        self.arguments
            .keys()
            .filter(|name| !ARGUMENT_NAMES.contains(&name.as_str()))
            .cloned()
            .collect()
    }

    /// Overrides from the config file layered under environment overrides.
    #[must_use]
    pub fn argument_overrides(&self) -> Overrides {
        let mut overrides = Overrides::new();
        for (name, value) in &self.arguments {
            overrides.set(name.clone(), value.clone());
        }
        overrides.merge(env_overrides(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        })));
        overrides
    }
}

/// Collect `TRT_LAUNCH_ARG_<NAME>` variables as overrides for `<name>`.
pub fn env_overrides<I>(vars: I) -> Overrides
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut overrides = Overrides::new();
    for (key, value) in vars {
        if let Some(name) = key.strip_prefix(ENV_ARGUMENT_PREFIX) {
            if !name.is_empty() {
                overrides.set(name.to_ascii_lowercase(), value);
            }
        }
    }
    overrides
}
