//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use serde::Deserialize;
use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use crate::errors::FieldlineError;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "fieldline=debug",
            Profile::Production => "fieldline=info",
            Profile::Test => "fieldline=trace",
        }
    }
}

impl FromStr for Profile {
    type Err = FieldlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            _ => Err(FieldlineError::InvalidProfile {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Profile {
    type Error = FieldlineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// This function should be called once at application startup.
/// It sets up the tracing subscriber based on the selected profile.
/// Later calls are no-ops, whatever profile they pass.
///
/// # Profiles
///
/// - **Development**: Human-readable lines, `fieldline=debug`
/// - **Production**: JSON structured output, `fieldline=info`
/// - **Test**: Bare registry; capture is installed via `init_test_capture()`
///
/// `RUST_LOG` overrides the profile's default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
        };

        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter()).try_init().ok();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter())
                    .try_init()
                    .ok();
            }
            Profile::Test => {
                tracing_subscriber::registry().try_init().ok();
            }
        }
    });
}
