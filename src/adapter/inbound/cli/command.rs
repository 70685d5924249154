//! Command-line interface definitions.
//!
//! Defines the CLI structure for tensor-rt-launch using `clap`. Subcommands
//! render the launch plan, list its arguments, preview resolution under
//! overrides, check the plan against the plugin contract, and manage the
//! tool's own configuration file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Config file picked up from the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "tensor-rt-launch.toml";

/// Launch plan builder for the Isaac ROS TensorRT node
#[derive(Parser, Debug)]
#[command(name = "tensor-rt-launch")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Plan output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Structured JSON
    Json,
    /// ROS 2 launch XML
    Xml,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the launch plan
    Plan(PlanArgs),

    /// List declared launch arguments and their defaults
    Args,

    /// Resolve the plan under `name:=value` overrides
    Resolve(ResolveArgs),

    /// Check the plan against the TensorRT plugin contract
    Check,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `tensor-rt-launch config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Optional configuration file shared by plan-producing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOption {
    /// Path to configuration file [default: ./tensor-rt-launch.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for `plan`.
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: ConfigOption,

    /// Output format (overrides `[render] format`)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write the plan to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub config: ConfigOption,

    /// Argument overrides, e.g. `model_file_path:=/models/mnet.onnx`
    #[arg(value_name = "NAME:=VALUE")]
    pub overrides: Vec<String>,
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Path to write the configuration file
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// A configuration file path argument.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}
