//! Hosted plugin port.
//!
//! The inference plugin is a separately built shared library that the
//! container loads by name. Its internals are out of reach here, so it is
//! represented only by the schema it promises to accept: the parameter
//! names it reads and the topics it exposes for remapping. Implementations
//! describe a concrete plugin; nothing in this crate can verify the
//! description against the binary itself.

use crate::domain::argument::ValueKind;
use crate::domain::node::PluginRef;

/// One parameter the plugin reads at load time.
///
/// `kind` is checked against the kind of the argument the parameter
/// references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub kind: ValueKind,
}

/// Documented parameter and topic schema of a hosted plugin.
///
/// # Implementation Notes
///
/// - Parameter names are matched exactly; plugins do not rename.
/// - An empty [`topics`](PluginContract::topics) list means the plugin
///   exposes nothing remappable.
pub trait PluginContract: Send + Sync {
    /// Entry point the contract describes.
    fn entry_point(&self) -> PluginRef;

    /// Every parameter the plugin expects, each exactly once.
    fn parameters(&self) -> &[ParameterSpec];

    /// Topic names the plugin publishes or subscribes to.
    fn topics(&self) -> &[&'static str];
}
