//! Emit command
//!
//! Usage: fieldline emit [--level <LEVEL>] [--profile <PROFILE>] [--config <FILE>] <event flags>

use clap::Args;
use fieldline_core::logger::{LogLevel, Logger, TracingSink};
use fieldline_core::logging_facility::init;
use fieldline_core::LoggerConfig;
use std::path::PathBuf;

use super::event::EventArgs;

#[derive(Debug, Args)]
pub struct EmitArgs {
    #[command(flatten)]
    pub event: EventArgs,

    /// Level to log at (verbose, debug, info, warn, error, fatal)
    #[arg(short, long, default_value = "info")]
    pub level: String,

    /// Logging profile (development, production, test); overrides config
    #[arg(long)]
    pub profile: Option<String>,

    /// Source context attached to the emitted record; overrides config
    #[arg(long)]
    pub source_context: Option<String>,

    /// TOML config file (default: FIELDLINE_* environment variables)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => LoggerConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => LoggerConfig::from_env()?,
    };

    if let Some(profile) = &args.profile {
        config.profile = profile.parse()?;
    }
    if let Some(source_context) = args.source_context.clone() {
        config.source_context = Some(source_context);
    }

    let level: LogLevel = args.level.parse()?;
    let event = args.event.to_event()?;

    init(config.profile);

    let logger = Logger::from_config(TracingSink::new(), &config);
    logger.log(level, &event);

    Ok(())
}
