//! Canonical test configurations.
//!
//! Single source of truth for config TOML used across tests.

/// Minimal valid configuration: logging and render sections, no overrides.
pub const MINIMAL: &str = r#"
[logging]
level = "warn"
format = "pretty"

[render]
format = "json"
"#;

/// Configuration overriding `model_file_path` and setting one name that
/// matches no declared argument.
pub const WITH_OVERRIDES: &str = r#"
[logging]
level = "warn"
format = "pretty"

[arguments]
model_file_path = "/models/from_config.onnx"
batch_size = "4"
"#;

/// Configuration with an unsupported log format.
pub const BAD_LOG_FORMAT: &str = r#"
[logging]
level = "info"
format = "xml"
"#;
