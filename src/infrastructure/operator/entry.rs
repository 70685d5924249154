//! Concrete operator wired by the composition root.

use crate::adapter::outbound::plugin::tensor_rt::TensorRtPluginContract;
use crate::adapter::outbound::render::json::JsonRenderer;
use crate::adapter::outbound::render::xml::XmlRenderer;
use crate::port::inbound::operator::launch::RenderFormat;
use crate::port::outbound::plugin::PluginContract;
use crate::port::outbound::render::PlanRenderer;

/// Operator implementation backing the CLI.
pub struct Operator {
    contract: Box<dyn PluginContract>,
}

impl Operator {
    /// Operator checking plans against `contract`.
    #[must_use]
    pub fn with_contract(contract: Box<dyn PluginContract>) -> Self {
        Self { contract }
    }

    pub(super) fn contract(&self) -> &dyn PluginContract {
        self.contract.as_ref()
    }

    pub(super) fn renderer(format: RenderFormat) -> Box<dyn PlanRenderer> {
        match format {
            RenderFormat::Json => Box::new(JsonRenderer),
            RenderFormat::Xml => Box::new(XmlRenderer),
        }
    }
}

impl Default for Operator {
    fn default() -> Self {
        Self::with_contract(Box::new(TensorRtPluginContract))
    }
}

/// Build the default operator.
#[must_use]
pub fn operator() -> Operator {
    Operator::default()
}
