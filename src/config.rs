//! Password storage configuration
//!
//! Selects the scheme used for newly generated credentials and the minimum
//! accepted password length. Values come from an optional TOML file with
//! `CREDHASH_*` environment overrides.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use log::{debug, info};
use serde::Deserialize;

use crate::error::handlers::handle_config_error;
use crate::error::{ConfigError, CredentialError};
use crate::scheme::{Scheme, resolve_by_name};

/// Storage value that keeps passwords unhashed
pub const PLAIN_STORAGE: &str = "plain";

pub const DEFAULT_STORAGE: &str = "md5";
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 5;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PasswordConfig {
    /// Scheme name for new credentials, or `plain`
    /// Environment: CREDHASH_PASSWORD_STORAGE
    pub password_storage: String,

    /// Shortest password accepted when generating; 0 disables the check
    /// Environment: CREDHASH_MIN_PASSWORD_LENGTH
    pub min_password_length: usize,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            password_storage: DEFAULT_STORAGE.to_string(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordConfig {
    /// Load from `path` (any extension the `config` crate knows, optional)
    /// with environment overrides
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("CREDHASH"));

        Self::from_sources(builder).inspect_err(handle_config_error)
    }

    /// Build from caller-assembled sources, then validate
    pub fn from_sources(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: PasswordConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        info!(
            "Password storage: {} (min length {})",
            config.password_storage, config.min_password_length
        );
        Ok(config)
    }

    /// Reject storage names that are neither `plain` nor a known scheme
    pub fn validate(&self) -> Result<(), CredentialError> {
        if self.is_plain() || self.storage_scheme().is_some() {
            return Ok(());
        }

        debug!("Configured storage '{}' did not resolve", self.password_storage);
        Err(CredentialError::UnsupportedScheme(
            self.password_storage.clone(),
        ))
    }

    pub fn is_plain(&self) -> bool {
        self.password_storage.eq_ignore_ascii_case(PLAIN_STORAGE)
    }

    /// Scheme for new credentials, `None` for plain storage
    pub fn storage_scheme(&self) -> Option<Scheme> {
        resolve_by_name(Some(&self.password_storage))
    }
}
