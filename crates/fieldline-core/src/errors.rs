use thiserror::Error;

/// Result type alias using FieldlineError
pub type Result<T> = std::result::Result<T, FieldlineError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and the CLI can
/// match on without depending on message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidLevel,
    InvalidProfile,
    InvalidField,
    InvalidConfig,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidLevel => "ERR_INVALID_LEVEL",
            ErrorKind::InvalidProfile => "ERR_INVALID_PROFILE",
            ErrorKind::InvalidField => "ERR_INVALID_FIELD",
            ErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }
}

/// Errors raised while parsing log settings and field input
///
/// The line builder itself never fails; these errors come from the
/// surfaces that turn text (flags, environment, config files) into
/// levels, profiles and fields.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldlineError {
    /// Unrecognised log level name
    #[error("Unknown log level: '{value}'")]
    InvalidLevel { value: String },

    /// Unrecognised logging profile name
    #[error("Unknown logging profile: '{value}'")]
    InvalidProfile { value: String },

    /// Field text that does not follow `Key=Value`
    #[error("Malformed field '{input}': expected Key=Value")]
    InvalidField { input: String },

    /// Configuration text could not be read
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl FieldlineError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldlineError::InvalidLevel { .. } => ErrorKind::InvalidLevel,
            FieldlineError::InvalidProfile { .. } => ErrorKind::InvalidProfile,
            FieldlineError::InvalidField { .. } => ErrorKind::InvalidField,
            FieldlineError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<toml::de::Error> for FieldlineError {
    fn from(err: toml::de::Error) -> Self {
        FieldlineError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let kinds = [
            ErrorKind::InvalidLevel,
            ErrorKind::InvalidProfile,
            ErrorKind::InvalidField,
            ErrorKind::InvalidConfig,
        ];

        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_display_includes_input() {
        let err = FieldlineError::InvalidField {
            input: "novalue".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed field 'novalue': expected Key=Value"
        );
    }
}
