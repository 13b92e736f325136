//! Input validation utilities
//!
//! Provides blank checks for optional caller input.

/// True for an absent value or one that is empty after trimming whitespace
pub fn is_blank(input: Option<&str>) -> bool {
    input.is_none_or(|s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(is_blank(Some("\t")));
        assert!(is_blank(Some(" \r\n ")));
        assert!(!is_blank(Some(" Jane Doe ")));
    }
}
