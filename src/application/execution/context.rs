//! Launch configuration state built up while walking a plan.

use std::collections::HashMap;

use crate::domain::argument::LaunchArgument;
use crate::domain::resolved::{ResolvedArgument, ValueSource};
use crate::domain::substitution::{LaunchConfiguration, ParameterValue};

use super::overrides::Overrides;

/// Values known so far, in the order the plan declared them.
///
/// A value becomes visible only once its declaration has been processed,
/// which is what makes declaration order matter.
#[derive(Debug)]
pub struct LaunchContext<'a> {
    overrides: &'a Overrides,
    values: HashMap<String, String>,
    declared: Vec<ResolvedArgument>,
}

impl<'a> LaunchContext<'a> {
    #[must_use]
    pub fn new(overrides: &'a Overrides) -> Self {
        Self {
            overrides,
            values: HashMap::new(),
            declared: Vec::new(),
        }
    }

    /// Process a declaration: the override wins over the default.
    pub fn declare(&mut self, argument: &LaunchArgument) {
        let name = argument.name().as_str();
        let (value, source) = match self.overrides.get(name) {
            Some(value) => (value.to_string(), ValueSource::Override),
            None => (argument.default_value().to_string(), ValueSource::Default),
        };

        self.values.insert(name.to_string(), value.clone());
        self.declared.push(ResolvedArgument {
            name: argument.name().clone(),
            value,
            source,
        });
    }

    /// Current value behind a reference, if its argument is declared.
    #[must_use]
    pub fn lookup(&self, reference: &LaunchConfiguration) -> Option<&str> {
        self.values
            .get(reference.argument().as_str())
            .map(String::as_str)
    }

    /// Substitute a parameter value.
    #[must_use]
    pub fn perform(&self, value: &ParameterValue) -> Option<String> {
        match value {
            ParameterValue::Reference(reference) => self.lookup(reference).map(str::to_string),
            ParameterValue::Literal(literal) => Some(literal.clone()),
        }
    }

    /// Override names that no declaration consumed.
    #[must_use]
    pub fn unused_overrides(&self) -> Vec<String> {
        self.overrides
            .iter()
            .filter(|(name, _)| !self.values.contains_key(*name))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    #[must_use]
    pub fn into_arguments(self) -> Vec<ResolvedArgument> {
        self.declared
    }
}
