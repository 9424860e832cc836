//! Logger configuration
//!
//! Settings come from TOML text or from `FIELDLINE_*` environment
//! variables. Missing settings fall back to the defaults.

use serde::Deserialize;

use crate::errors::Result;
use crate::logger::LogLevel;
use crate::logging_facility::Profile;

pub const ENV_MIN_LEVEL: &str = "FIELDLINE_MIN_LEVEL";
pub const ENV_PROFILE: &str = "FIELDLINE_PROFILE";
pub const ENV_SOURCE_CONTEXT: &str = "FIELDLINE_SOURCE_CONTEXT";

/// Settings for a logger and the logging facility
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub profile: Profile,
    pub source_context: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            profile: Profile::Development,
            source_context: None,
        }
    }
}

impl LoggerConfig {
    /// Parse TOML text such as:
    ///
    /// ```toml
    /// min_level = "debug"
    /// profile = "production"
    /// source_context = "billing"
    /// ```
    ///
    /// # Errors
    /// * `InvalidConfig` - If the text is not valid TOML or holds an unknown
    ///   key, level or profile
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read settings from the process environment
    ///
    /// # Errors
    /// * `InvalidLevel` - If `FIELDLINE_MIN_LEVEL` names no level
    /// * `InvalidProfile` - If `FIELDLINE_PROFILE` names no profile
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value
    ///
    /// # Errors
    /// Same as [`LoggerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_MIN_LEVEL) {
            config.min_level = level.parse()?;
        }
        if let Some(profile) = lookup(ENV_PROFILE) {
            config.profile = profile.parse()?;
        }
        if let Some(source_context) = lookup(ENV_SOURCE_CONTEXT) {
            if !source_context.trim().is_empty() {
                config.source_context = Some(source_context);
            }
        }

        Ok(config)
    }
}
