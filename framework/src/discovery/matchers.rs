//! String match predicates used by the file finder
//!
//! These are plain free functions on purpose: they carry no state and no
//! failure modes, so they need neither a trait nor a registry.

/// True iff `haystack` starts with `needle`.
///
/// An empty `needle` matches any string (a zero-length prefix comparison).
pub fn matches_prefix(needle: &str, haystack: &str) -> bool {
    haystack.starts_with(needle)
}

/// True iff `needle` occurs anywhere within `haystack`.
pub fn matches_substring(needle: &str, haystack: &str) -> bool {
    haystack.contains(needle)
}

/// True iff `haystack` ends with `needle`.
///
/// Same empty-needle degenerate behavior as [`matches_prefix`].
pub fn matches_suffix(needle: &str, haystack: &str) -> bool {
    haystack.ends_with(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matches() {
        assert!(matches_prefix("ab", "abc"));
        assert!(!matches_prefix("ab", "xabc"));
        assert!(!matches_prefix("abc", "ab"));
    }

    #[test]
    fn test_empty_needle_matches_any_string() {
        assert!(matches_prefix("", "anything"));
        assert!(matches_suffix("", "anything"));
        assert!(matches_prefix("", ""));
        assert!(matches_suffix("", ""));
    }

    #[test]
    fn test_substring_matches() {
        assert!(matches_substring("rout", "user.router.php"));
        assert!(matches_substring("user.router.php", "user.router.php"));
        assert!(!matches_substring("x", ""));
        assert!(!matches_substring("routes", "router"));
    }

    #[test]
    fn test_suffix_matches() {
        assert!(matches_suffix(".router.php", "user.router.php"));
        assert!(!matches_suffix(".router.php", "user.router.php.bak"));
        assert!(!matches_suffix("longer-than-haystack", "short"));
    }
}
