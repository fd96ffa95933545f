//! Shared client-side form checks. These only catch obvious mistakes
//! before a request is spent; the backend remains the real validator.

use regex::Regex;

/// Loose check for an absolute http(s) URL with no whitespace.
pub fn looks_like_url(value: &str) -> bool {
    let re = Regex::new(r"^https?://\S+$").unwrap();
    re.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_check_accepts_http_and_https_only() {
        assert!(looks_like_url("https://example.com/doc.pdf"));
        assert!(looks_like_url("http://example.com"));
        assert!(!looks_like_url("example.com/doc.pdf"));
        assert!(!looks_like_url("https://exa mple.com"));
        assert!(!looks_like_url("ftp://example.com"));
    }
}
