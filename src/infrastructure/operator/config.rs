//! Configuration operator implementation.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::config::{ConfigView, ConfigurationOperator};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Config::parse_toml(config_toml)?;
        let unknown_arguments = config.unknown_arguments();

        Ok(ConfigView {
            log_level: config.logging.level,
            log_format: config.logging.format,
            render_format: config.render.format.as_str().to_string(),
            arguments: config.arguments.into_iter().collect(),
            unknown_arguments,
        })
    }
}
