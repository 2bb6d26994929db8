//! Case-insensitive text matching for terms, definitions and typed answers.
//!
//! Matching is exact apart from letter case: no whitespace collapsing and no
//! similarity scoring.

/// Fold a string into the key used by the collection indices.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Compare two strings ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    fold_case(a) == fold_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_case() {
        assert!(eq_ignore_case("Gato", "gATO"));
        assert!(!eq_ignore_case("gato", "gatos"));
    }

    #[test]
    fn test_non_ascii_case() {
        assert!(eq_ignore_case("ÄRGER", "ärger"));
        assert!(eq_ignore_case("Привет", "привет"));
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert!(!eq_ignore_case(" gato", "gato"));
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("Der Hund"), "der hund");
    }
}
