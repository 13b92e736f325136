//! Credential generation and matching
//!
//! Generation rejects missing inputs with an error; matching is total and
//! answers `false` for every unusable combination.

use log::{debug, warn};

use super::Scheme;
use super::parser::{ParsedCredential, format_stored};
use super::registry::lookup;
use crate::error::CredentialError;
use crate::secret::Password;
use crate::utils::validation::is_blank;

impl Scheme {
    /// Produce the stored credential `IDENTIFIER:hex` for a password
    ///
    /// Schemes that ignore the username accept one anyway.
    pub fn to_stored_credential(
        self,
        password: Option<&Password>,
        username: Option<&str>,
    ) -> Result<String, CredentialError> {
        let Some(password) = password else {
            warn!("Refusing to hash an absent password with {}", self);
            return Err(CredentialError::MissingPassword);
        };

        if self.requires_username() && is_blank(username) {
            warn!("Refusing to hash a password with {} without a username", self);
            return Err(CredentialError::MissingUsername(self));
        }

        let payload = self.digest(password, username);
        Ok(format_stored(self.identifier(), &payload))
    }

    /// Check a candidate password against a stored credential of this scheme
    ///
    /// Hex payloads compare case-insensitively. Credentials stamped with
    /// another scheme never match.
    pub fn matches(
        self,
        stored: Option<&str>,
        password: Option<&Password>,
        username: Option<&str>,
    ) -> bool {
        let Some(parsed) = stored.and_then(ParsedCredential::parse) else {
            return false;
        };

        if lookup(parsed.scheme_id) != Some(self) {
            debug!("Stored credential is not a {} entry", self);
            return false;
        }

        let Some(password) = password else {
            return false;
        };

        if self.requires_username() && is_blank(username) {
            debug!("No username given to match a {} entry", self);
            return false;
        }

        let computed = self.digest(password, username);
        parsed.payload.eq_ignore_ascii_case(&computed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MD5_ENTRY: &str = "MD5:5F4DCC3B5AA765D61D8327DEB882CF99";
    const CMD5_ENTRY: &str = "CMD5:DB9639A6E5F21457F9DFD7735FAFA68B";

    #[test]
    fn test_md5_stored_credential() {
        let password = Password::new("password");
        let stored = Scheme::Md5.to_stored_credential(Some(&password), None).unwrap();
        assert_eq!(stored, "MD5:5f4dcc3b5aa765d61d8327deb882cf99");
        assert!(stored.eq_ignore_ascii_case(MD5_ENTRY));
    }

    #[test]
    fn test_cmd5_stored_credential() {
        let password = Password::new("password");
        let stored = Scheme::Cmd5
            .to_stored_credential(Some(&password), Some("Jane Doe"))
            .unwrap();
        assert!(stored.eq_ignore_ascii_case(CMD5_ENTRY));
    }

    #[test]
    fn test_absent_password_is_an_error() {
        for scheme in Scheme::ALL {
            assert_eq!(
                scheme.to_stored_credential(None, Some("jane")),
                Err(CredentialError::MissingPassword)
            );
        }
    }

    #[test]
    fn test_cmd5_blank_username_is_an_error() {
        let password = Password::new("password");
        for username in [None, Some(""), Some("   "), Some("\t")] {
            assert_eq!(
                Scheme::Cmd5.to_stored_credential(Some(&password), username),
                Err(CredentialError::MissingUsername(Scheme::Cmd5))
            );
        }
    }

    #[test]
    fn test_matches_any_username_for_md5() {
        let password = Password::new("password");
        for username in [None, Some(""), Some("maxine")] {
            assert!(Scheme::Md5.matches(Some(MD5_ENTRY), Some(&password), username));
        }
    }

    #[test]
    fn test_cmd5_blank_username_does_not_match() {
        let password = Password::new("password");
        for username in [None, Some(""), Some("    ")] {
            assert!(!Scheme::Cmd5.matches(Some(CMD5_ENTRY), Some(&password), username));
        }
    }

    #[test]
    fn test_payload_compares_case_insensitively() {
        let password = Password::new("password");
        let lower = MD5_ENTRY.to_ascii_lowercase();
        assert!(Scheme::Md5.matches(Some(lower.as_str()), Some(&password), None));
    }

    #[test]
    fn test_wrong_scheme_never_matches() {
        let password = Password::new("password");
        assert!(!Scheme::Md5.matches(Some(CMD5_ENTRY), Some(&password), Some("Jane Doe")));
        assert!(!Scheme::Cmd5.matches(Some(MD5_ENTRY), Some(&password), Some("Jane Doe")));
    }
}
