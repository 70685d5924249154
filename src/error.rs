use thiserror::Error;

use crate::domain::argument::ValueKind;
use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while substituting argument values into a plan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("launch configuration '{argument}' is not declared (used by parameter '{parameter}' of node '{node}')")]
    UnresolvedReference {
        node: String,
        parameter: String,
        argument: String,
    },

    #[error("invalid override '{input}': {reason}")]
    InvalidOverride { input: String, reason: String },
}

/// Mismatches between a plan and the parameter/topic schema of its plugin.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("node '{node}' loads plugin '{found}', contract is for '{expected}'")]
    PluginMismatch {
        node: String,
        expected: String,
        found: String,
    },

    #[error("node '{node}' is missing parameters expected by the plugin: {names:?}")]
    MissingParameters { node: String, names: Vec<String> },

    #[error("node '{node}' sets parameters the plugin does not accept: {names:?}")]
    UnexpectedParameters { node: String, names: Vec<String> },

    #[error("node '{node}' remaps topics the plugin does not expose: {names:?}")]
    UnknownTopics { node: String, names: Vec<String> },

    #[error("parameter '{parameter}' of node '{node}' is declared as {found}, plugin reads {expected}")]
    KindMismatch {
        node: String,
        parameter: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("no node in the plan loads plugin '{plugin}'")]
    PluginNotLoaded { plugin: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
