//! Stored password credentials
//!
//! Detects which hashing scheme produced a `SCHEME:HASH` credential string,
//! verifies candidate passwords against it and generates new credentials.

pub mod auth;
pub mod config;
pub mod error;
pub mod scheme;
pub mod secret;
pub mod utils;

pub use auth::{encode_password, needs_rehash, verify_password};
pub use crate::config::PasswordConfig;
pub use error::{ConfigError, CredentialError};
pub use scheme::{Scheme, is_stored_credential, resolve_by_name, resolve_for_credential};
pub use secret::Password;
