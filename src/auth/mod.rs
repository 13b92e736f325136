//! Authentication helpers
//!
//! Password verification and generation policy over the scheme registry.
//! Credential storage and user lookup belong to the caller.

pub mod validator;

pub use validator::{encode_password, needs_rehash, verify_password};
