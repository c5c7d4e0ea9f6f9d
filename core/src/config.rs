#![deny(missing_docs)]

//! # Extraction Configuration
//!
//! Read-only settings threaded into the section walker: where the content body
//! lives, which headings name endpoints, which of them to skip, and which
//! endpoints are known to document a JSON body.

/// Selector of the element holding the API reference content.
pub const DEFAULT_CONTENT_SELECTOR: &str = "div.span9.content-body";

/// Tag of the headings naming one endpoint each.
pub const DEFAULT_ENDPOINT_TAG: &str = "h3";

/// Paragraph text introducing the JSON body parameters.
pub const DEFAULT_JSON_HEADING: &str = "Json Parameters:";

/// Paragraph text introducing the status codes.
pub const DEFAULT_STATUS_HEADING: &str = "Status Codes:";

/// Pattern matched against paragraphs introducing the query parameters.
pub const DEFAULT_QUERY_HEADING: &str = r"^Query Parameters?";

/// Endpoint headings that never describe a request.
pub const DEFAULT_SKIP_HEADINGS: &[&str] = &["Image tarball format"];

/// `<METHOD> <URL>` strings whose documentation carries a JSON body section.
///
/// Hand-maintained; nothing checks it against the source document.
pub const DEFAULT_JSON_ENDPOINTS: &[&str] = &[
    "POST /containers/(id)/exec",
    "POST /exec/(id)/start",
    "POST /commit",
    "POST /containers/create",
];

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// CSS selector of the content body container.
    pub content_selector: String,
    /// Tag name of endpoint headings (e.g. `h3`).
    pub endpoint_tag: String,
    /// Heading texts to leave out of the output (exact match).
    pub skip_headings: Vec<String>,
    /// Request strings allowed to carry JSON parameters (exact match).
    pub json_endpoints: Vec<String>,
    /// Exact paragraph text of the JSON parameters section.
    pub json_heading: String,
    /// Exact paragraph text of the status codes section.
    pub status_heading: String,
    /// Regex matched against the query parameters paragraph.
    pub query_heading: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            content_selector: DEFAULT_CONTENT_SELECTOR.to_string(),
            endpoint_tag: DEFAULT_ENDPOINT_TAG.to_string(),
            skip_headings: DEFAULT_SKIP_HEADINGS.iter().map(|s| s.to_string()).collect(),
            json_endpoints: DEFAULT_JSON_ENDPOINTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            json_heading: DEFAULT_JSON_HEADING.to_string(),
            status_heading: DEFAULT_STATUS_HEADING.to_string(),
            query_heading: DEFAULT_QUERY_HEADING.to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Adds a heading to the skip-list.
    pub fn with_skip_heading(mut self, heading: impl Into<String>) -> Self {
        self.skip_headings.push(heading.into());
        self
    }

    /// Adds a `<METHOD> <URL>` string to the JSON body allow-list.
    pub fn with_json_endpoint(mut self, request: impl Into<String>) -> Self {
        self.json_endpoints.push(request.into());
        self
    }

    /// Uses a different content body selector.
    pub fn with_content_selector(mut self, selector: impl Into<String>) -> Self {
        self.content_selector = selector.into();
        self
    }

    /// Whether the heading text is on the skip-list.
    pub fn is_skipped(&self, heading: &str) -> bool {
        self.skip_headings.iter().any(|h| h == heading)
    }

    /// Whether the request string is on the JSON body allow-list.
    pub fn has_json_body(&self, request: &str) -> bool {
        self.json_endpoints.iter().any(|r| r == request)
    }
}
