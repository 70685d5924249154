//! Deferred value handles.
//!
//! A [`LaunchConfiguration`] names an argument whose value is only known
//! once the orchestration runtime has applied overrides. Composition code
//! passes handles around; only the executor turns them into values (see
//! [`crate::domain::resolved`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::ArgumentName;

/// Lazy reference to a launch argument's eventual value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchConfiguration {
    argument: ArgumentName,
}

impl LaunchConfiguration {
    /// Create a handle for the named argument.
    pub fn new(argument: impl Into<ArgumentName>) -> Self {
        Self {
            argument: argument.into(),
        }
    }

    /// Argument this handle resolves through.
    #[must_use]
    pub fn argument(&self) -> &ArgumentName {
        &self.argument
    }
}

impl fmt::Display for LaunchConfiguration {
    /// Renders in launch substitution syntax, `$(var name)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$(var {})", self.argument)
    }
}

/// Value bound to a node parameter before execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParameterValue {
    /// Resolved from a launch argument at execution time.
    Reference(LaunchConfiguration),
    /// Fixed string passed through as-is.
    Literal(String),
}

impl ParameterValue {
    /// The referenced argument, if this value is deferred.
    #[must_use]
    pub fn reference(&self) -> Option<&LaunchConfiguration> {
        match self {
            Self::Reference(reference) => Some(reference),
            Self::Literal(_) => None,
        }
    }
}

impl From<LaunchConfiguration> for ParameterValue {
    fn from(reference: LaunchConfiguration) -> Self {
        Self::Reference(reference)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(reference) => write!(f, "{reference}"),
            Self::Literal(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_displays_as_var_substitution() {
        let reference = LaunchConfiguration::new("model_file_path");
        assert_eq!(reference.to_string(), "$(var model_file_path)");
    }

    #[test]
    fn literal_has_no_reference() {
        let value = ParameterValue::Literal("42".into());
        assert!(value.reference().is_none());
        assert_eq!(value.to_string(), "42");
    }

    #[test]
    fn reference_serializes_with_type_tag() {
        let value = ParameterValue::from(LaunchConfiguration::new("verbose"));
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["type"], "reference");
        assert_eq!(json["value"]["argument"], "verbose");
    }
}
