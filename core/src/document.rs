#![deny(missing_docs)]

//! # API Document
//!
//! The parsed reference page, its content body and the digest that lets
//! generated code detect changes in the source documentation.

use crate::config::ExtractionConfig;
use crate::error::{AppError, AppResult};
use crate::model::RequestModel;
use crate::parser::SectionWalker;
use scraper::{ElementRef, Html, Selector};
use sha2::{Digest, Sha256};

/// A fully parsed HTML reference page.
pub struct ApiDocument {
    html: Html,
}

impl ApiDocument {
    /// Parses a whole HTML document. Parsing itself never fails.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// The underlying HTML tree.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// The first element matching `selector`.
    ///
    /// # Errors
    ///
    /// * `AppError::Selector` if `selector` is not valid CSS.
    /// * `AppError::ContentNotFound` if nothing matches.
    pub fn content_body(&self, selector: &str) -> AppResult<ElementRef<'_>> {
        let parsed = Selector::parse(selector).map_err(|e| AppError::Selector(e.to_string()))?;

        self.html
            .select(&parsed)
            .next()
            .ok_or_else(|| AppError::ContentNotFound(selector.to_string()))
    }

    /// Hex SHA-256 of the content body's serialized HTML.
    pub fn content_digest(&self, selector: &str) -> AppResult<String> {
        let content = self.content_body(selector)?;
        Ok(digest_hex(&content.html()))
    }
}

/// Lowercase hex SHA-256 of `data`.
pub fn digest_hex(data: &str) -> String {
    format!("{:x}", Sha256::digest(data.as_bytes()))
}

/// Result of running the extraction pipeline over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// One model per endpoint heading, in document order.
    pub requests: Vec<RequestModel>,
    /// Digest of the content body (see `ApiDocument::content_digest`).
    pub content_digest: String,
}

/// Parses `source` and extracts every endpoint.
///
/// # Examples
/// ```
/// use devour_core::config::ExtractionConfig;
/// use devour_core::document::extract;
///
/// let html = r#"<div class="span9 content-body">
///     <h3>Ping the docker server</h3>
///     <code>GET /_ping</code>
/// </div>"#;
/// let extraction = extract(html, &ExtractionConfig::default()).unwrap();
/// assert_eq!(extraction.requests[0].query(), "/_ping");
/// assert_eq!(extraction.content_digest.len(), 64);
/// ```
pub fn extract(source: &str, config: &ExtractionConfig) -> AppResult<Extraction> {
    let document = ApiDocument::parse(source);
    let walker = SectionWalker::new(config)?;
    let content = document.content_body(&config.content_selector)?;
    let content_digest = digest_hex(&content.html());
    let requests = walker.walk_content(&document, content)?;

    Ok(Extraction {
        requests,
        content_digest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_known_value() {
        assert_eq!(
            digest_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_tracks_content_only() {
        let a = ApiDocument::parse(
            r#"<title>A</title><div class="span9 content-body"><h3>x</h3></div>"#,
        );
        let b = ApiDocument::parse(
            r#"<title>B</title><div class="span9 content-body"><h3>x</h3></div>"#,
        );
        let c = ApiDocument::parse(r#"<div class="span9 content-body"><h3>y</h3></div>"#);

        let selector = "div.span9.content-body";
        assert_eq!(
            a.content_digest(selector).unwrap(),
            b.content_digest(selector).unwrap()
        );
        assert_ne!(
            a.content_digest(selector).unwrap(),
            c.content_digest(selector).unwrap()
        );
    }

    #[test]
    fn test_extract_digests_the_walked_content() {
        let source = r#"<div class="span9 content-body">
            <h3>Ping the docker server</h3><code>GET /_ping</code>
        </div>"#;
        let config = ExtractionConfig::default();

        let extraction = extract(source, &config).unwrap();

        let document = ApiDocument::parse(source);
        let content = document.content_body(&config.content_selector).unwrap();
        assert_eq!(extraction.content_digest, digest_hex(&content.html()));
        assert_eq!(
            extraction.requests,
            SectionWalker::new(&config)
                .unwrap()
                .walk_content(&document, content)
                .unwrap()
        );
    }

    #[test]
    fn test_content_body_errors() {
        let document = ApiDocument::parse("<div class=\"content\"></div>");
        assert!(matches!(
            document.content_body("div.span9.content-body"),
            Err(AppError::ContentNotFound(_))
        ));
        assert!(matches!(
            document.content_body("div[["),
            Err(AppError::Selector(_))
        ));
    }
}
