//! Launch plan projections for operator-facing adapters.
//!
//! Requests carry raw TOML and raw `name:=value` strings so adapters stay
//! free of parsing and filesystem concerns.

use serde::Deserialize;

use crate::domain::resolved::ResolvedPlan;
use crate::error::Result;

/// Output format for a rendered plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Structured JSON mirroring the plan types.
    #[default]
    Json,
    /// ROS 2 launch XML frontend.
    Xml,
}

impl RenderFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

/// Request to render the plan.
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Raw TOML configuration content, if a config file is in use.
    pub config_toml: Option<String>,
    /// Format override; falls back to the configured format.
    pub format: Option<RenderFormat>,
}

/// Rendered plan text and the format it is in.
#[derive(Debug, Clone)]
pub struct RenderedPlan {
    pub format: RenderFormat,
    pub text: String,
}

/// Row of the declared-arguments listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentView {
    pub name: String,
    pub default_value: String,
    pub kind: String,
    pub description: String,
}

/// Request to resolve the plan under overrides.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    /// Raw TOML configuration content, if a config file is in use.
    pub config_toml: Option<String>,
    /// Command-line overrides in `name:=value` form; highest precedence.
    pub overrides: Vec<String>,
}

/// Plan construction, listing, and resolution preview.
pub trait LaunchOperator: Send + Sync {
    /// Render the launch plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or rendering fails.
    fn render_plan(&self, request: &PlanRequest) -> Result<RenderedPlan>;

    /// Declared arguments in declaration order.
    fn list_arguments(&self) -> Vec<ArgumentView>;

    /// Substitute argument values the way the orchestration runtime would.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or an override is malformed,
    /// or if a reference cannot be resolved.
    fn resolve_plan(&self, request: &ResolveRequest) -> Result<ResolvedPlan>;
}
