//! Password material
//!
//! SECURITY: `Password` wipes its characters on `clear()` and on drop, and
//! never reveals them through `Debug`.

use std::fmt;

/// Candidate or new password held as a clearable character buffer
pub struct Password(Vec<char>);

impl Password {
    /// Create a password from anything that yields characters
    pub fn new(password: impl Into<Password>) -> Self {
        password.into()
    }

    /// Characters of the password
    ///
    /// Use this sparingly and only when the digest needs them.
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the password is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|c| c.is_whitespace())
    }

    /// Overwrite every character and empty the buffer
    pub fn clear(&mut self) {
        for c in self.0.iter_mut() {
            // SAFETY: `c` is a valid, exclusively borrowed element of our buffer
            unsafe { std::ptr::write_volatile(c, '\0') };
        }
        self.0.clear();
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for Password {
    fn clone(&self) -> Self {
        Password(self.0.clone())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(*** {} chars ***)", self.0.len())
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Password(value.chars().collect())
    }
}

impl From<String> for Password {
    fn from(mut value: String) -> Self {
        let password = Password(value.chars().collect());
        wipe_string(&mut value);
        password
    }
}

impl From<Vec<char>> for Password {
    fn from(value: Vec<char>) -> Self {
        Password(value)
    }
}

/// Zero a byte buffer that held password material
pub(crate) fn wipe_bytes(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        // SAFETY: `byte` is a valid, exclusively borrowed element of the slice
        unsafe { std::ptr::write_volatile(byte, 0) };
    }
}

fn wipe_string(value: &mut String) {
    // SAFETY: zero bytes are valid UTF-8, so the string stays well formed
    wipe_bytes(unsafe { value.as_bytes_mut() });
    value.clear();
}
