//! `campus`: wires config, logging and the registry together on the sample data.
//!
//! Usage: `campus [CONFIG_FILE]`. Environment overrides use the `UNI__` prefix.

mod demo;

use anyhow::Context;
use std::path::PathBuf;
use uni::domain::config::{LoggingConfig, ShellConfig};
use uni::domain::constants::APP_NAME;
use uni::kernel::config::load_config;
use uni_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config: ShellConfig = load_config(config_path.as_deref())?;

    let _logger = init_logger(&config.logging)?;
    tracing::info!(university = %config.university, "Starting {APP_NAME}");

    demo::run(&config.university)?;

    Ok(())
}

fn init_logger(config: &LoggingConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter =
        config.level.parse().with_context(|| format!("Invalid log level '{}'", config.level))?;

    let mut builder = Logger::builder().name(APP_NAME).console(config.console).level(level);
    if let Some(filter) = &config.env_filter {
        builder = builder.env_filter(filter.clone());
    }

    let logger = match &config.path {
        Some(path) if config.json => builder.path(path).json().init()?,
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };

    Ok(logger)
}
