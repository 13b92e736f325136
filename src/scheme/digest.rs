//! Digest computation
//!
//! Characters are encoded one byte each as ISO-8859-1; anything above
//! U+00FF becomes `?`.

use md5::{Digest, Md5};

use super::Scheme;
use crate::secret::{Password, wipe_bytes};

/// Hex characters in an MD5 digest
pub const MD5_HEX_LEN: usize = 32;

const UNMAPPABLE: u8 = b'?';

fn latin1(c: char) -> u8 {
    u8::try_from(u32::from(c)).unwrap_or(UNMAPPABLE)
}

/// Lowercase hex MD5 of the ISO-8859-1 encoding of `chars`
fn md5_hex(chars: impl Iterator<Item = char>) -> String {
    let mut input: Vec<u8> = chars.map(latin1).collect();
    let mut hasher = Md5::new();
    hasher.update(&input);
    wipe_bytes(&mut input);
    hex::encode(hasher.finalize())
}

impl Scheme {
    /// Hex digest of the inputs
    ///
    /// Callers check the username requirement first; a missing username
    /// hashes as an empty one.
    pub(crate) fn digest(self, password: &Password, username: Option<&str>) -> String {
        let chars = password.chars().iter().copied();
        match self {
            Scheme::Md5 => md5_hex(chars),
            Scheme::Cmd5 => {
                let username = username.unwrap_or_default().to_lowercase();
                md5_hex(username.chars().chain(chars))
            }
        }
    }
}
