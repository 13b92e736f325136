//! Scheme registry
//!
//! Case-insensitive lookup from identifier to scheme. Names without an
//! implemented scheme (`plain`, `bcrypt`, `scrypt`, ...) resolve to `None`,
//! same as any other unknown name.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::debug;

use super::Scheme;
use super::parser::ParsedCredential;

/// Uppercased identifier to scheme, built once
static SCHEMES: LazyLock<HashMap<&'static str, Scheme>> = LazyLock::new(|| {
    Scheme::ALL
        .iter()
        .map(|scheme| (scheme.identifier(), *scheme))
        .collect()
});

pub(crate) fn lookup(scheme_id: &str) -> Option<Scheme> {
    SCHEMES.get(scheme_id.to_ascii_uppercase().as_str()).copied()
}

/// Resolve a scheme from its name, ignoring case
pub fn resolve_by_name(name: Option<&str>) -> Option<Scheme> {
    let name = name?;
    let scheme = lookup(name);
    if scheme.is_none() {
        debug!("No password hashing scheme named '{}'", name);
    }
    scheme
}

/// Resolve the scheme that produced a stored credential
///
/// Plaintext values, values without a delimiter and values stamped with an
/// unknown identifier all resolve to `None`.
pub fn resolve_for_credential(stored: Option<&str>) -> Option<Scheme> {
    // The identifier is not logged: a plaintext password may contain the delimiter.
    let parsed = ParsedCredential::parse(stored?)?;
    lookup(parsed.scheme_id)
}

/// True only for `KNOWN-ID:payload` strings
pub fn is_stored_credential(stored: Option<&str>) -> bool {
    resolve_for_credential(stored).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_holds_every_scheme() {
        assert_eq!(SCHEMES.len(), Scheme::ALL.len());
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(lookup("cmd5"), Some(Scheme::Cmd5));
        assert_eq!(lookup("Md5"), Some(Scheme::Md5));
        assert_eq!(lookup(" MD5"), None);
    }

    #[test]
    fn test_resolve_by_name_does_not_trim() {
        assert_eq!(resolve_by_name(Some("md5 ")), None);
        assert_eq!(resolve_by_name(Some("")), None);
    }

    #[test]
    fn test_resolve_for_credential_ignores_payload() {
        assert_eq!(resolve_for_credential(Some("MD5:")), Some(Scheme::Md5));
        assert_eq!(resolve_for_credential(Some("cmd5:not-hex")), Some(Scheme::Cmd5));
        assert_eq!(resolve_for_credential(Some(":MD5")), None);
    }
}
