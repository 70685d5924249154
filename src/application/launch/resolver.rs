//! Binds declared arguments to deferred references.

use crate::domain::argument::LaunchArgument;
use crate::domain::substitution::LaunchConfiguration;

/// References for a set of declarations, one per declared name.
///
/// Only built from declarations, so every handle it gives out traces back
/// to exactly one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSet {
    references: Vec<LaunchConfiguration>,
}

impl ConfigurationSet {
    /// Create one reference per declaration, in declaration order.
    #[must_use]
    pub fn bind(arguments: &[LaunchArgument]) -> Self {
        let references = arguments
            .iter()
            .map(|argument| LaunchConfiguration::new(argument.name().clone()))
            .collect();
        Self { references }
    }

    /// Reference for a declared argument.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LaunchConfiguration> {
        self.references
            .iter()
            .find(|reference| reference.argument().as_str() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LaunchConfiguration> {
        self.references.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}
