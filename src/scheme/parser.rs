//! Stored credential parsing
//!
//! Splits `IDENTIFIER:PAYLOAD` on the first delimiter. The payload is not
//! validated here.

/// Separator between scheme identifier and hex payload
pub const DELIMITER: char = ':';

/// Borrowed view of a stored credential string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCredential<'a> {
    pub scheme_id: &'a str,
    pub payload: &'a str,
}

impl<'a> ParsedCredential<'a> {
    /// Split a stored credential, or `None` when there is no delimiter
    pub fn parse(stored: &'a str) -> Option<Self> {
        let (scheme_id, payload) = stored.split_once(DELIMITER)?;
        Some(Self { scheme_id, payload })
    }
}

/// Build the stored form of a digest
pub(crate) fn format_stored(scheme_id: &str, payload: &str) -> String {
    format!("{}{}{}", scheme_id, DELIMITER, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_first_delimiter() {
        let parsed = ParsedCredential::parse("MD5:abc:def").unwrap();
        assert_eq!(parsed.scheme_id, "MD5");
        assert_eq!(parsed.payload, "abc:def");
    }

    #[test]
    fn test_no_delimiter() {
        assert_eq!(ParsedCredential::parse("password"), None);
        assert_eq!(ParsedCredential::parse(""), None);
    }

    #[test]
    fn test_empty_parts() {
        let parsed = ParsedCredential::parse(":").unwrap();
        assert_eq!(parsed.scheme_id, "");
        assert_eq!(parsed.payload, "");
    }

    #[test]
    fn test_format_stored() {
        assert_eq!(format_stored("CMD5", "00ff"), "CMD5:00ff");
    }
}
