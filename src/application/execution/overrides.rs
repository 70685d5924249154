//! Operator-supplied argument overrides.
//!
//! Overrides use launch command-line syntax, `name:=value`. Sources are
//! layered with [`Overrides::merge`]; a later layer wins per name.

use std::collections::BTreeMap;

use crate::error::ResolveError;

const SEPARATOR: &str = ":=";

/// Argument values replacing declared defaults, keyed by argument name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: BTreeMap<String, String>,
}

impl Overrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one override, replacing any earlier value for the name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Layer `other` on top of `self`.
    pub fn merge(&mut self, other: Overrides) {
        self.values.extend(other.values);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse `name:=value` pairs. Values may be empty and may contain `:=`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidOverride`] for a pair without `:=` or
    /// with a name that is empty or not a valid identifier.
    pub fn parse<'a, I>(pairs: I) -> Result<Self, ResolveError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut overrides = Self::new();
        for pair in pairs {
            let (name, value) = split_pair(pair)?;
            overrides.set(name, value);
        }
        Ok(overrides)
    }
}

/// Split one `name:=value` pair.
///
/// # Errors
///
/// See [`Overrides::parse`].
pub fn split_pair(pair: &str) -> Result<(&str, &str), ResolveError> {
    let Some((name, value)) = pair.split_once(SEPARATOR) else {
        return Err(ResolveError::InvalidOverride {
            input: pair.to_string(),
            reason: format!("expected `name{SEPARATOR}value`"),
        });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ResolveError::InvalidOverride {
            input: pair.to_string(),
            reason: "argument name is empty".to_string(),
        });
    }
    if !is_identifier(name) {
        return Err(ResolveError::InvalidOverride {
            input: pair.to_string(),
            reason: format!("'{name}' is not a valid argument name"),
        });
    }

    Ok((name, value))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        let overrides =
            Overrides::parse(["model_file_path:=/models/mnet.onnx", "verbose:=True"]).unwrap();
        assert_eq!(overrides.get("model_file_path"), Some("/models/mnet.onnx"));
        assert_eq!(overrides.get("verbose"), Some("True"));
    }

    #[test]
    fn value_may_be_empty_or_contain_separator() {
        let overrides = Overrides::parse(["engine_file_path:=", "x:=a:=b"]).unwrap();
        assert_eq!(overrides.get("engine_file_path"), Some(""));
        assert_eq!(overrides.get("x"), Some("a:=b"));
    }

    #[test]
    fn rejects_missing_separator() {
        let err = Overrides::parse(["verbose=True"]).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidOverride { ref input, .. } if input == "verbose=True"));
    }

    #[test]
    fn rejects_bad_names() {
        assert!(Overrides::parse([":=x"]).is_err());
        assert!(Overrides::parse(["1abc:=x"]).is_err());
        assert!(Overrides::parse(["a-b:=x"]).is_err());
    }

    #[test]
    fn merge_prefers_later_layer() {
        let mut base = Overrides::new().with("verbose", "False").with("a", "1");
        base.merge(Overrides::new().with("verbose", "True"));
        assert_eq!(base.get("verbose"), Some("True"));
        assert_eq!(base.get("a"), Some("1"));
    }
}
