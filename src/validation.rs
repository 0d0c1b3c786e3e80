// SPDX-License-Identifier: MPL-2.0
//! Syntactic URL validation for the input field.
//!
//! Validity is recomputed on every edit and never touches the network:
//! a candidate is valid when it parses as an absolute URL with a
//! non-empty host component. The empty string is a distinct "no input"
//! case rather than an error.

use crate::error::ValidationError;
use url::Url;

/// Outcome of validating the current field contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UrlStatus {
    /// Nothing typed yet; generation disabled with a neutral prompt.
    #[default]
    Empty,
    /// Typed text that is not an absolute URL with a host.
    Invalid(ValidationError),
    /// A syntactically well-formed URL, ready for generation.
    Valid(CheckedUrl),
}

impl UrlStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, UrlStatus::Valid(_))
    }

    pub fn as_valid(&self) -> Option<&CheckedUrl> {
        match self {
            UrlStatus::Valid(checked) => Some(checked),
            _ => None,
        }
    }
}

/// A validated candidate URL.
///
/// Keeps the text exactly as typed: the QR symbol must encode the
/// user's string, not the parser's normalization of it (which would
/// e.g. append a trailing slash to `https://example.com`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedUrl {
    raw: String,
    host: String,
}

impl CheckedUrl {
    /// The URL text exactly as it appears in the input field.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The host/authority component, as parsed (ports excluded,
    /// internationalized domains in punycode form).
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Validates a candidate string.
///
/// A successful `Url::parse` guarantees a non-empty scheme, so the
/// scheme+host requirement reduces to a host check afterwards. Hosts
/// that parse as present-but-empty (some `file:` forms) count as
/// missing, matching the "non-empty host/authority" contract.
pub fn check(text: &str) -> UrlStatus {
    if text.is_empty() {
        return UrlStatus::Empty;
    }

    match Url::parse(text) {
        Ok(url) => match url.host_str() {
            Some(host) if !host.is_empty() => UrlStatus::Valid(CheckedUrl {
                raw: text.to_string(),
                host: host.to_string(),
            }),
            _ => UrlStatus::Invalid(ValidationError::MissingHost),
        },
        Err(e) => UrlStatus::Invalid(ValidationError::Malformed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_distinct_from_invalid() {
        assert_eq!(check(""), UrlStatus::Empty);
        assert!(!check("").is_valid());
    }

    #[test]
    fn plain_text_is_invalid() {
        match check("not a url") {
            UrlStatus::Invalid(ValidationError::Malformed(_)) => {}
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_only_is_invalid_not_empty() {
        assert!(matches!(check("   "), UrlStatus::Invalid(_)));
    }

    #[test]
    fn https_url_with_path_is_valid() {
        let status = check("https://example.com/path");
        let checked = status.as_valid().expect("should be valid");
        assert_eq!(checked.raw(), "https://example.com/path");
        assert_eq!(checked.host(), "example.com");
    }

    #[test]
    fn raw_text_is_kept_unnormalized() {
        // Url::parse would normalize this to "https://openai.com/".
        let status = check("https://openai.com");
        assert_eq!(status.as_valid().expect("valid").raw(), "https://openai.com");
    }

    #[test]
    fn www_prefix_is_part_of_the_host() {
        let status = check("http://www.openai.com");
        assert_eq!(status.as_valid().expect("valid").host(), "www.openai.com");
    }

    #[test]
    fn any_scheme_with_host_is_valid() {
        assert!(check("ftp://files.example.com").is_valid());
    }

    #[test]
    fn scheme_without_host_is_invalid() {
        assert_eq!(
            check("mailto:user@example.com"),
            UrlStatus::Invalid(ValidationError::MissingHost)
        );
        assert!(matches!(check("data:text/plain,hi"), UrlStatus::Invalid(_)));
    }

    #[test]
    fn scheme_with_empty_authority_is_invalid() {
        assert!(matches!(check("https://"), UrlStatus::Invalid(_)));
    }

    #[test]
    fn host_without_scheme_is_invalid() {
        assert!(matches!(check("example.com"), UrlStatus::Invalid(_)));
        assert!(matches!(check("www.example.com/page"), UrlStatus::Invalid(_)));
    }

    #[test]
    fn host_keeps_port_out() {
        let status = check("https://example.com:8443/x");
        assert_eq!(status.as_valid().expect("valid").host(), "example.com");
    }
}
