use std::path::Path;

use clap::Parser;
use tracing::{debug, error};

use tensor_rt_launch::adapter::inbound::cli::command::{
    Cli, ColorChoice, Commands, ConfigCommand, DEFAULT_CONFIG_FILE,
};
use tensor_rt_launch::adapter::inbound::cli::output::{self, OutputConfig};
use tensor_rt_launch::adapter::inbound::cli::{args, check, config, operator, plan, resolve};
use tensor_rt_launch::error::Result;
use tensor_rt_launch::infrastructure::config::logging::LoggingConfig;
use tensor_rt_launch::infrastructure::config::settings::Config;
use tensor_rt_launch::infrastructure::operator::entry;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    output::set_color(match cli.color {
        ColorChoice::Auto => None,
        ColorChoice::Always => Some(true),
        ColorChoice::Never => Some(false),
    });

    logging_config(&cli).with_verbosity(cli.verbose).init();
    debug!(command = ?cli.command, "tensor-rt-launch starting");

    if operator::install(Box::new(entry::operator())).is_err() {
        output::error("operator already installed");
        std::process::exit(1);
    }

    if let Err(e) = dispatch(cli.command) {
        error!(error = %e, "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Plan(args) => plan::execute(&args),
        Commands::Args => args::execute(),
        Commands::Resolve(args) => resolve::execute(&args),
        Commands::Check => check::execute(),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    }
}

/// Logging section of whichever config file the command will read.
///
/// Falls back to defaults when there is no file or it does not parse; the
/// command itself reports a broken file.
fn logging_config(cli: &Cli) -> LoggingConfig {
    let explicit = match &cli.command {
        Commands::Plan(args) => args.config.config.as_deref(),
        Commands::Resolve(args) => args.config.config.as_deref(),
        Commands::Config(ConfigCommand::Show(arg) | ConfigCommand::Validate(arg)) => {
            Some(arg.config.as_path())
        }
        Commands::Args | Commands::Check | Commands::Config(ConfigCommand::Init(_)) => None,
    };

    let path = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    if !path.is_file() {
        return LoggingConfig::default();
    }
    Config::load(path)
        .map(|config| config.logging)
        .unwrap_or_default()
}
