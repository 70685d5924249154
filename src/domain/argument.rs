//! Launch argument declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::ArgumentName;

/// Type the hosted plugin decodes an argument's string value into.
///
/// Purely descriptive: the launch layer never parses values, so `"False"`
/// stays the string `"False"` all the way to the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Filesystem path string.
    Path,
    /// Bracketed list of quoted strings, e.g. `["input"]`.
    StringList,
    /// `True` / `False` in Python spelling.
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Path => "path",
            Self::StringList => "string list",
            Self::Boolean => "boolean",
        };
        f.write_str(label)
    }
}

/// A named, overridable configuration input with a string default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchArgument {
    name: ArgumentName,
    default_value: String,
    description: String,
    kind: ValueKind,
}

impl LaunchArgument {
    /// Declare an argument.
    pub fn new(
        name: impl Into<ArgumentName>,
        default_value: impl Into<String>,
        description: impl Into<String>,
        kind: ValueKind,
    ) -> Self {
        Self {
            name: name.into(),
            default_value: default_value.into(),
            description: description.into(),
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &ArgumentName {
        &self.name
    }

    /// Default value exactly as declared, never decoded.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}
