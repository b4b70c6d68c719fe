//! URL detection shared by the randomizer and the interleaver.

use once_cell::sync::Lazy;
use regex::Regex;

/// `http://` or `https://` followed by a run of non-whitespace.
pub(crate) static URL_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://\S+").expect("url pattern is valid"));

/// Token that starts with a URL scheme.
static URL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("url prefix pattern is valid"));

/// Whether a whitespace-free token is a URL.
pub(crate) fn is_url_token(token: &str) -> bool {
    URL_PREFIX.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_urls_case_insensitively() {
        let spans: Vec<&str> = URL_SPAN
            .find_iter("go HTTPS://Example.com/x and http://a.b now")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(spans, vec!["HTTPS://Example.com/x", "http://a.b"]);
    }

    #[test]
    fn url_token_needs_scheme_at_start() {
        assert!(is_url_token("https://x.y"));
        assert!(is_url_token("Http://x.y"));
        assert!(!is_url_token("(https://x.y)"));
        assert!(!is_url_token("ftp://x.y"));
        assert!(!is_url_token("https:/broken"));
    }
}
