//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Launch argument name - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentName(String);

impl ArgumentName {
    /// Create a new `ArgumentName` from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the argument name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArgumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArgumentName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ArgumentName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Topic name as seen by a hosted node - newtype for type safety.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicName(String);

impl TopicName {
    /// Create a new `TopicName` from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the topic name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TopicName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_name_serializes_as_plain_string() {
        let name = ArgumentName::new("verbose");
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"verbose\"");
    }

    #[test]
    fn argument_names_order_lexically() {
        let mut names = vec![ArgumentName::from("verbose"), ArgumentName::from("engine_file_path")];
        names.sort();
        assert_eq!(names[0].as_str(), "engine_file_path");
    }
}
