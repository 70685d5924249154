//! Diagnostic operator implementation.

use crate::application::contract::check_plan;
use crate::application::launch::assembler::generate_launch_description;
use crate::error::Result;
use crate::port::inbound::operator::diagnostic::{ContractCheckReport, DiagnosticOperator};

use super::entry::Operator;

impl DiagnosticOperator for Operator {
    fn check_plan(&self) -> Result<ContractCheckReport> {
        let plan = generate_launch_description();
        plan.validate()?;
        let report = check_plan(&plan, self.contract())?;

        Ok(ContractCheckReport {
            plugin: report.plugin,
            nodes: report.nodes,
            parameters: report.parameters,
            remappings: report.remappings,
            arguments: plan.arguments().count(),
            containers: plan.containers().count(),
        })
    }
}
