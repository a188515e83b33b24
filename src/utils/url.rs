use crate::errors::ExtractionError;

use url::Url;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Trims the input and prefixes `https://` unless it already starts with `http`.
#[must_use]
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http") {
        trimmed.to_owned()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    }
}

/// Normalizes and parses user input before it reaches the extractor.
pub fn parse_url(input: &str) -> Result<Url, ExtractionError> {
    if input.trim().is_empty() {
        return Err(ExtractionError::EmptyUrl);
    }

    let normalized = normalize_url(input);
    Url::parse(&normalized).map_err(|source| ExtractionError::InvalidUrl {
        url: normalized.into_boxed_str(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_http() {
        assert_eq!(normalize_url("https://youtu.be/abcdefghijk"), "https://youtu.be/abcdefghijk");
        assert_eq!(normalize_url("http://example.com/video"), "http://example.com/video");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(
            normalize_url("  https://www.youtube.com/watch?v=abcdefghijk \n"),
            "https://www.youtube.com/watch?v=abcdefghijk"
        );
    }

    #[test]
    fn test_normalize_adds_scheme() {
        assert_eq!(normalize_url("youtu.be/abcdefghijk"), "https://youtu.be/abcdefghijk");
        assert_eq!(normalize_url(" www.youtube.com/shorts/abcdefghijk"), "https://www.youtube.com/shorts/abcdefghijk");
    }

    #[test]
    fn test_normalize_only_checks_prefix() {
        assert_eq!(normalize_url("httpbin.org/get"), "httpbin.org/get");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_url("   "), Err(ExtractionError::EmptyUrl)));
    }

    #[test]
    fn test_parse_valid() {
        let url = parse_url("youtube.com/watch?v=abcdefghijk").unwrap();
        assert_eq!(url.host_str(), Some("youtube.com"));
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(parse_url("not a url"), Err(ExtractionError::InvalidUrl { .. })));
    }
}
