//! Miette-based error diagnostics for CLI error presentation.
//!
//! Renders a malformed `name:=value` override with a label under the part
//! that is wrong and a hint showing the expected shape.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, SourceSpan};
use thiserror::Error;

/// Malformed argument override with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid argument override: {reason}")]
#[diagnostic(code(tensor_rt_launch::override_syntax))]
pub struct OverrideDiagnostic {
    /// The override exactly as typed.
    #[source_code]
    pub src: String,

    /// What is wrong with it.
    pub reason: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl OverrideDiagnostic {
    /// Build a diagnostic for `input`, labelling the name when a separator
    /// is present and the whole input otherwise.
    #[must_use]
    pub fn new(input: &str, reason: impl Into<String>) -> Self {
        let span = match input.find(":=") {
            Some(0) => (0, 2),
            Some(end) => (0, end),
            None => (0, input.len()),
        };
        Self {
            src: input.to_string(),
            reason: reason.into(),
            span: span.into(),
            help: Some(
                "pass overrides as name:=value, e.g. model_file_path:=/models/mnet.onnx"
                    .to_string(),
            ),
        }
    }

    /// Render as a graphical report, or `None` if rendering fails.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        let mut out = String::new();
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, self)
            .ok()
            .map(|()| out)
    }
}
