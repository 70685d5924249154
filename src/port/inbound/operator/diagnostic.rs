//! Diagnostic projections for operator-facing adapters.

use crate::error::Result;

/// Summary output for `check`.
#[derive(Debug, Clone)]
pub struct ContractCheckReport {
    pub plugin: String,
    pub nodes: Vec<String>,
    pub parameters: usize,
    pub remappings: usize,
    pub arguments: usize,
    pub containers: usize,
}

/// Plan diagnostics.
pub trait DiagnosticOperator: Send + Sync {
    /// Validate plan structure and check it against the plugin contract.
    ///
    /// # Errors
    ///
    /// Returns a domain error for a structural defect or a contract error
    /// for a schema mismatch.
    fn check_plan(&self) -> Result<ContractCheckReport>;
}
