//! Password validator
//!
//! Verifies candidate passwords against whatever the caller has stored,
//! hashed or plaintext, and generates new stored values per configuration.

use log::{debug, info};

use crate::config::PasswordConfig;
use crate::error::CredentialError;
use crate::error::handlers::handle_error;
use crate::scheme::resolve_for_credential;
use crate::secret::Password;

/// Verify a candidate password against a stored value
///
/// Hashed entries are checked by their own scheme; anything else is
/// compared as plaintext. Never fails.
pub fn verify_password(
    stored: Option<&str>,
    password: Option<&Password>,
    username: Option<&str>,
) -> bool {
    if let Some(scheme) = resolve_for_credential(stored) {
        return scheme.matches(stored, password, username);
    }

    let (Some(stored), Some(password)) = (stored, password) else {
        return false;
    };

    if stored.trim().is_empty() {
        debug!("Refusing to verify against a blank stored password");
        return false;
    }

    stored.chars().eq(password.chars().iter().copied())
}

/// Produce the value to store for a new password
pub fn encode_password(
    config: &PasswordConfig,
    password: Option<&Password>,
    username: Option<&str>,
) -> Result<String, CredentialError> {
    encode(config, password, username).inspect_err(handle_error)
}

fn encode(
    config: &PasswordConfig,
    password: Option<&Password>,
    username: Option<&str>,
) -> Result<String, CredentialError> {
    let password = password.ok_or(CredentialError::MissingPassword)?;

    if password.len() < config.min_password_length {
        return Err(CredentialError::PasswordTooShort {
            min: config.min_password_length,
            actual: password.len(),
        });
    }

    if config.is_plain() {
        return Ok(password.chars().iter().collect());
    }

    let scheme = config
        .storage_scheme()
        .ok_or_else(|| CredentialError::UnsupportedScheme(config.password_storage.clone()))?;
    scheme.to_stored_credential(Some(password), username)
}

/// True when `stored` should be regenerated under the configured scheme
///
/// Call after a successful verification, while the plaintext is at hand.
pub fn needs_rehash(stored: Option<&str>, config: &PasswordConfig) -> bool {
    let Some(target) = config.storage_scheme() else {
        return false;
    };

    let current = resolve_for_credential(stored);
    if current != Some(target) {
        info!(
            "Stored password uses {}, configured storage is {}",
            current.map_or("plaintext", |s| s.identifier()),
            target
        );
        return true;
    }
    false
}
