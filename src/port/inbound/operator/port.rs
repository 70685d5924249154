//! Unified operator capability surface for inbound adapters.

use super::config::ConfigurationOperator;
use super::diagnostic::DiagnosticOperator;
use super::launch::LaunchOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ConfigurationOperator + DiagnosticOperator + LaunchOperator {}

impl<T> OperatorPort for T where T: ConfigurationOperator + DiagnosticOperator + LaunchOperator {}
