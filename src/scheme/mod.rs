//! Password hashing schemes
//!
//! A closed set of schemes, each stamping its stored credentials with a
//! short uppercase identifier: `MD5:<hex>` or `CMD5:<hex>`.

pub mod digest;
pub mod matcher;
pub mod parser;
pub mod registry;

use std::fmt;

pub use parser::{DELIMITER, ParsedCredential};
pub use registry::{is_stored_credential, resolve_by_name, resolve_for_credential};

/// Supported hashing scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// MD5 digest of the password
    Md5,
    /// MD5 digest of the lowercased username followed by the password
    Cmd5,
}

impl Scheme {
    /// Every supported scheme, in registration order
    pub const ALL: [Scheme; 2] = [Scheme::Md5, Scheme::Cmd5];

    /// Canonical identifier written in front of the delimiter
    pub fn identifier(self) -> &'static str {
        match self {
            Scheme::Md5 => "MD5",
            Scheme::Cmd5 => "CMD5",
        }
    }

    /// Whether the digest binds the credential to a username
    pub fn requires_username(self) -> bool {
        match self {
            Scheme::Md5 => false,
            Scheme::Cmd5 => true,
        }
    }

    /// Length of the hex payload produced by this scheme
    pub fn payload_len(self) -> usize {
        match self {
            Scheme::Md5 | Scheme::Cmd5 => digest::MD5_HEX_LEN,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
