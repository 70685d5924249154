//! Plan rendering port.

use crate::domain::plan::LaunchPlan;
use crate::error::Result;

/// Serializes a launch plan into a format an orchestration runtime reads.
pub trait PlanRenderer: Send + Sync {
    /// Short format name used in configuration and CLI flags.
    fn name(&self) -> &'static str;

    /// Render the full plan as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    fn render(&self, plan: &LaunchPlan) -> Result<String>;
}
