//! Field sanitizers applied by the profile builder before storing input

const GMAIL_SUFFIX: &str = "@gmail.com";

/// Trim and collapse runs of whitespace into a single space
pub fn sanitize_name(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Titles (institute names) follow the same rules as names
pub fn sanitize_title(value: &str) -> String {
    sanitize_name(value)
}

pub fn sanitize_email(value: &str) -> String {
    value.trim().to_string()
}

/// Trim and drop a trailing `@gmail.com`, so that `alice@gmail.com` and
/// `alice` name the same account
pub fn sanitize_google_id(value: &str) -> String {
    let trimmed = value.trim();
    let split = trimmed.len().checked_sub(GMAIL_SUFFIX.len());
    match split {
        Some(at)
            if trimmed.is_char_boundary(at)
                && trimmed[at..].eq_ignore_ascii_case(GMAIL_SUFFIX) =>
        {
            trimmed[..at].to_string()
        }
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name_collapses_whitespace() {
        assert_eq!(sanitize_name("  Alice \t  van   Dyke \n"), "Alice van Dyke");
        assert_eq!(sanitize_name("   "), "");
    }

    #[test]
    fn test_sanitize_email_trims() {
        assert_eq!(sanitize_email("  alice@example.com "), "alice@example.com");
    }

    #[test]
    fn test_sanitize_google_id() {
        assert_eq!(sanitize_google_id(" alice@gmail.com "), "alice");
        assert_eq!(sanitize_google_id("Alice@GMAIL.com"), "Alice");
        assert_eq!(sanitize_google_id("alice@example.com"), "alice@example.com");
        assert_eq!(sanitize_google_id("alice"), "alice");
        assert_eq!(sanitize_google_id("ü"), "ü");
    }
}
