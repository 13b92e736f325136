//! Error handlers
//!
//! Provides error reporting helpers for hosts embedding the crate.

use log::error;

use crate::error::types::{ConfigError, CredentialError};

/// Log a credential generation error
pub fn handle_error(err: &CredentialError) {
    error!("Credential error: {}", err);
}

/// Log a configuration error
pub fn handle_config_error(err: &ConfigError) {
    error!("{}", err);
}
