#![deny(missing_docs)]

//! Header vs. parameter heuristics.

use regex::Regex;
use std::sync::OnceLock;

/// Whether a list line most likely names an HTTP header.
///
/// Header names are written Capitalized-Hyphenated (`Content-Type`,
/// `X-Registry-Auth`), query parameters are lowercase or camelCase.
///
/// # Examples
/// ```
/// use devour_core::parser::looks_like_header;
///
/// assert!(looks_like_header("Content-Type – application/tar"));
/// assert!(!looks_like_header("filters – a JSON encoded value"));
/// ```
pub fn looks_like_header(text: &str) -> bool {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    let header_re =
        HEADER_RE.get_or_init(|| Regex::new(r"^[A-Z][A-Za-z-]+").expect("Invalid regex"));

    header_re.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_hyphenated() {
        assert!(looks_like_header("X-Registry-Auth – base64-encoded AuthConfig"));
        assert!(looks_like_header("Content-type"));
    }

    #[test]
    fn test_lowercase_and_camel_case() {
        assert!(!looks_like_header("all – 1/True/true or 0/False/false"));
        assert!(!looks_like_header("fromImage – name of the image"));
    }

    #[test]
    fn test_anchored_at_start() {
        assert!(!looks_like_header(" Content-Type"));
        assert!(!looks_like_header("- Content-Type"));
    }

    #[test]
    fn test_needs_two_letters() {
        // A single capital is not a word
        assert!(!looks_like_header("A"));
        assert!(!looks_like_header("A1"));
        assert!(looks_like_header("Ab"));
    }
}
