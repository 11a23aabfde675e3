//! Cookie blob validation.
//!
//! An integrity gate only: the blob is checked for the markers of a real,
//! authenticated YouTube cookie export and otherwise treated as opaque
//! text to be forwarded verbatim.

/// Marker identifying the cookie export as belonging to the YouTube domain.
const COOKIE_DOMAIN_MARKER: &str = "youtube.com";

/// Named cookie present only in an authenticated session.
const AUTH_SESSION_MARKER: &str = "LOGIN_INFO";

/// Validate a submitted cookie blob. Both markers must be present; blank
/// input always fails.
pub fn is_valid_cookies(blob: &str) -> bool {
    if blob.trim().is_empty() {
        return false;
    }
    blob.contains(COOKIE_DOMAIN_MARKER) && blob.contains(AUTH_SESSION_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = ".youtube.com\tTRUE\t/\tTRUE\t0\tLOGIN_INFO\tabc123";

    #[test]
    fn test_both_markers_validate() {
        assert!(is_valid_cookies(VALID));
    }

    #[test]
    fn test_missing_either_marker_fails() {
        assert!(!is_valid_cookies(".youtube.com\tTRUE\t/\tTRUE\t0\tSID\tabc"));
        assert!(!is_valid_cookies(".example.com\tTRUE\t/\tTRUE\t0\tLOGIN_INFO\tabc"));
    }

    #[test]
    fn test_blank_input_fails() {
        assert!(!is_valid_cookies(""));
        assert!(!is_valid_cookies("   \n\t  "));
    }
}
