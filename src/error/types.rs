//! Error types
//!
//! Verification never fails; only credential generation and configuration
//! loading report errors.

use std::fmt;

use crate::scheme::Scheme;

/// Precondition violations raised while generating a stored credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    MissingPassword,
    MissingUsername(Scheme),
    PasswordTooShort { min: usize, actual: usize },
    UnsupportedScheme(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::MissingPassword => write!(f, "A password is required"),
            CredentialError::MissingUsername(scheme) => {
                write!(f, "Scheme {} requires a non-blank username", scheme)
            }
            CredentialError::PasswordTooShort { min, actual } => write!(
                f,
                "Password too short: {} characters, at least {} required",
                actual, min
            ),
            CredentialError::UnsupportedScheme(name) => {
                write!(f, "Unsupported password storage scheme: {}", name)
            }
        }
    }
}

impl std::error::Error for CredentialError {}

/// Configuration loading errors
#[derive(Debug)]
pub enum ConfigError {
    Source(config::ConfigError),
    Invalid(CredentialError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Source(e) => write!(f, "Configuration error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Source(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(error: config::ConfigError) -> Self {
        ConfigError::Source(error)
    }
}

impl From<CredentialError> for ConfigError {
    fn from(error: CredentialError) -> Self {
        ConfigError::Invalid(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_username_names_scheme() {
        let err = CredentialError::MissingUsername(Scheme::Cmd5);
        assert_eq!(err.to_string(), "Scheme CMD5 requires a non-blank username");
    }

    #[test]
    fn test_config_error_wraps_credential_error() {
        let err: ConfigError = CredentialError::UnsupportedScheme("bcrypt".into()).into();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("bcrypt"));
    }
}
