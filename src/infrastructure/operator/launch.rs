//! Launch operator implementation.

use tracing::info;

use crate::application::execution::overrides::Overrides;
use crate::application::execution::resolve::resolve_plan;
use crate::application::launch::assembler::generate_launch_description;
use crate::domain::resolved::ResolvedPlan;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::launch::{
    ArgumentView, LaunchOperator, PlanRequest, RenderedPlan, ResolveRequest,
};

use super::entry::Operator;

impl LaunchOperator for Operator {
    fn render_plan(&self, request: &PlanRequest) -> Result<RenderedPlan> {
        let config = Config::from_optional_toml(request.config_toml.as_deref())?;
        let format = request.format.unwrap_or(config.render.format);
        let renderer = Self::renderer(format);

        let plan = generate_launch_description();
        let text = renderer.render(&plan)?;
        info!(format = renderer.name(), actions = plan.actions().len(), "rendered launch plan");

        Ok(RenderedPlan { format, text })
    }

    fn list_arguments(&self) -> Vec<ArgumentView> {
        generate_launch_description()
            .arguments()
            .map(|argument| ArgumentView {
                name: argument.name().to_string(),
                default_value: argument.default_value().to_string(),
                kind: argument.kind().to_string(),
                description: argument.description().to_string(),
            })
            .collect()
    }

    fn resolve_plan(&self, request: &ResolveRequest) -> Result<ResolvedPlan> {
        let config = Config::from_optional_toml(request.config_toml.as_deref())?;
        let mut overrides = config.argument_overrides();
        overrides.merge(Overrides::parse(request.overrides.iter().map(String::as_str))?);

        let plan = generate_launch_description();
        let resolved = resolve_plan(&plan, &overrides)?;
        info!(
            overrides = overrides.len(),
            ignored = resolved.ignored_overrides.len(),
            "resolved launch plan"
        );
        Ok(resolved)
    }
}
