//! JSON plan output.

use crate::domain::plan::LaunchPlan;
use crate::error::Result;
use crate::port::outbound::render::PlanRenderer;

/// Pretty-printed JSON mirroring the plan types.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl PlanRenderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, plan: &LaunchPlan) -> Result<String> {
        Ok(serde_json::to_string_pretty(plan)?)
    }
}
