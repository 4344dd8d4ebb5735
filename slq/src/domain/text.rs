//! Byte-wise case folding.
//!
//! Station names, line designations and destinations are compared with ASCII
//! case folding only. Non-ASCII letters such as `Ö` are left untouched, so
//! `"SÖDER"` does not match `"söder"`.

/// Lowercase ASCII letters, leaving every other byte as is.
pub fn fold(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Returns true if `haystack` contains `needle`, ignoring ASCII case.
///
/// An empty needle is contained in every haystack.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Parse a token that consists entirely of an unsigned decimal integer.
///
/// The empty string is not numeric.
pub fn parse_unsigned(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_is_ascii_only() {
        assert_eq!(fold("T-Centralen"), "t-centralen");
        assert_eq!(fold("SÖDERMALM"), "sÖdermalm");
    }

    #[test]
    fn contains_ignores_ascii_case() {
        assert!(contains_ignore_case("T-Centralen", "central"));
        assert!(contains_ignore_case("Slussen", "SLUSS"));
        assert!(!contains_ignore_case("Slussen", "central"));
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(contains_ignore_case("Slussen", ""));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn non_ascii_letters_do_not_fold() {
        assert!(!contains_ignore_case("Östermalmstorg", "östermalm"));
        assert!(contains_ignore_case("Östermalmstorg", "Östermalm"));
    }

    #[test]
    fn parse_unsigned_accepts_whole_numbers() {
        assert_eq!(parse_unsigned("9001"), Some(9001));
        assert_eq!(parse_unsigned("0"), Some(0));
        assert_eq!(parse_unsigned("007"), Some(7));
    }

    #[test]
    fn parse_unsigned_rejects_other_text() {
        assert_eq!(parse_unsigned(""), None);
        assert_eq!(parse_unsigned("9001a"), None);
        assert_eq!(parse_unsigned("+9001"), None);
        assert_eq!(parse_unsigned("-1"), None);
        assert_eq!(parse_unsigned(" 9001"), None);
        assert_eq!(parse_unsigned("Slussen"), None);
        assert_eq!(parse_unsigned("99999999999"), None);
    }
}
