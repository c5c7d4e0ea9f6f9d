#![deny(missing_docs)]

//! # Section Walker
//!
//! Visits every endpoint heading inside the content body and collects the
//! list items of the sub-sections that belong to it.
//!
//! The document is flattened into its elements in document order once. A
//! search "forward from a heading" is then a scan over the following indices,
//! and a sub-section belongs to a heading only if the closest endpoint heading
//! before its paragraph is that same heading.

use crate::config::ExtractionConfig;
use crate::document::ApiDocument;
use crate::error::{AppError, AppResult};
use crate::model::{ParamType, RequestModel};
use crate::parser::classifier::looks_like_header;
use regex::Regex;
use scraper::{ElementRef, Html};
use std::ops::Range;
use tracing::debug;

/// Prefix of the query parameter after which items are filter pairs.
const FILTERS_PREFIX: &str = "filters";

/// Text of an element: all descendant text, newlines removed, trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .replace(['\n', '\r'], "")
        .trim()
        .to_string()
}

fn is_tag(element: ElementRef<'_>, tag: &str) -> bool {
    element.value().name() == tag
}

/// Elements of a document in document (pre-)order.
struct DocumentOrder<'a> {
    elements: Vec<ElementRef<'a>>,
}

impl<'a> DocumentOrder<'a> {
    fn new(document: &'a Html) -> Self {
        Self {
            elements: document
                .root_element()
                .descendants()
                .filter_map(ElementRef::wrap)
                .collect(),
        }
    }

    fn get(&self, index: usize) -> ElementRef<'a> {
        self.elements[index]
    }

    fn position(&self, element: ElementRef<'a>) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == element.id())
    }

    /// Indices of the element and all of its descendants.
    fn subtree(&self, index: usize) -> Range<usize> {
        let len = self.elements[index]
            .descendants()
            .filter_map(ElementRef::wrap)
            .count();
        index..index + len
    }

    fn next_matching(
        &self,
        from: usize,
        predicate: impl Fn(ElementRef<'a>) -> bool,
    ) -> Option<usize> {
        (from + 1..self.elements.len()).find(|&i| predicate(self.elements[i]))
    }

    fn previous_matching(
        &self,
        from: usize,
        predicate: impl Fn(ElementRef<'a>) -> bool,
    ) -> Option<usize> {
        (0..from).rev().find(|&i| predicate(self.elements[i]))
    }
}

/// Extracts one `RequestModel` per endpoint heading.
pub struct SectionWalker<'c> {
    config: &'c ExtractionConfig,
    query_heading: Regex,
}

impl<'c> SectionWalker<'c> {
    /// Prepares a walker for the given configuration.
    pub fn new(config: &'c ExtractionConfig) -> AppResult<Self> {
        let query_heading = Regex::new(&config.query_heading).map_err(|e| {
            AppError::General(format!("Invalid query heading pattern: {}", e))
        })?;

        Ok(Self {
            config,
            query_heading,
        })
    }

    /// Walks the content body of `document`.
    ///
    /// Fails only when the content body is missing. Headings on the skip-list
    /// are left out; everything else yields one model, in document order.
    pub fn walk(&self, document: &ApiDocument) -> AppResult<Vec<RequestModel>> {
        let content = document.content_body(&self.config.content_selector)?;
        self.walk_content(document, content)
    }

    /// Walks an already located content body of `document`.
    pub fn walk_content<'d>(
        &self,
        document: &'d ApiDocument,
        content: ElementRef<'d>,
    ) -> AppResult<Vec<RequestModel>> {
        let order = DocumentOrder::new(document.html());

        let Some(content_index) = order.position(content) else {
            return Err(AppError::ContentNotFound(
                self.config.content_selector.clone(),
            ));
        };

        let requests = order
            .subtree(content_index)
            .filter(|&i| is_tag(order.get(i), &self.config.endpoint_tag))
            .filter_map(|heading| self.walk_heading(&order, heading))
            .collect();

        Ok(requests)
    }

    fn walk_heading(&self, order: &DocumentOrder<'_>, heading: usize) -> Option<RequestModel> {
        let description = element_text(order.get(heading));

        if self.config.is_skipped(&description) {
            debug!(heading = %description, "Skipping heading");
            return None;
        }

        let Some(code) = order.next_matching(heading, |e| is_tag(e, "code")) else {
            debug!(heading = %description, "No request line follows heading");
            return None;
        };

        let request_string = element_text(order.get(code));
        let (method, query) = request_string
            .split_once(' ')
            .unwrap_or((request_string.as_str(), ""));

        debug!(method, query, "(REQUEST)");

        let mut request = RequestModel::new(description);
        request.set_method(method);
        request.set_query(query);

        if self.config.has_json_body(&request_string) {
            self.collect_json_params(order, heading, &mut request);
        }
        self.collect_query_params(order, heading, &mut request);
        self.collect_status_codes(order, heading, &mut request);

        Some(request)
    }

    fn collect_json_params(
        &self,
        order: &DocumentOrder<'_>,
        heading: usize,
        request: &mut RequestModel,
    ) {
        let items = self.section_items(order, heading, |text| text == self.config.json_heading);

        for item in items {
            let line = element_text(item);
            debug!(line = %line, "(JSON)");
            request.add_raw_param(&line, ParamType::Json);
        }
    }

    fn collect_query_params(
        &self,
        order: &DocumentOrder<'_>,
        heading: usize,
        request: &mut RequestModel,
    ) {
        let items = self.section_items(order, heading, |text| self.query_heading.is_match(text));
        let mut in_query_filter = false;

        for item in items {
            let line = element_text(item);

            if in_query_filter {
                debug!(line = %line, "(FILTER)");
                request.add_raw_param(&line, ParamType::QueryFilter);
                continue;
            }

            debug!(line = %line, "(QUERY)");
            if line.starts_with(FILTERS_PREFIX) {
                in_query_filter = true;
            }

            let ty = if looks_like_header(&line) {
                ParamType::Header
            } else {
                ParamType::Query
            };
            request.add_raw_param(&line, ty);
        }
    }

    fn collect_status_codes(
        &self,
        order: &DocumentOrder<'_>,
        heading: usize,
        request: &mut RequestModel,
    ) {
        let items = self.section_items(order, heading, |text| text == self.config.status_heading);

        for item in items {
            // An item wrapping a paragraph is the last status code of the list
            let nested = item
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .find(|e| is_tag(*e, "p"));

            if let Some(paragraph) = nested {
                let line = element_text(paragraph);
                debug!(line = %line, "(FS_STATUS)");
                request.add_raw_param(&line, ParamType::Status);
                break;
            }

            let line = element_text(item);
            debug!(line = %line, "(STATUS)");
            request.add_raw_param(&line, ParamType::Status);
        }
    }

    /// List items of the first sub-section after `heading` whose paragraph
    /// text satisfies `matches`, provided no other endpoint heading intervenes.
    fn section_items<'a>(
        &self,
        order: &DocumentOrder<'a>,
        heading: usize,
        matches: impl Fn(&str) -> bool,
    ) -> Vec<ElementRef<'a>> {
        let Some(paragraph) = order.next_matching(heading, |e| {
            is_tag(e, "p") && matches(&element_text(e))
        }) else {
            return Vec::new();
        };

        let owner = order.previous_matching(paragraph, |e| is_tag(e, &self.config.endpoint_tag));
        if owner != Some(heading) {
            debug!(paragraph, "Section belongs to a later heading");
            return Vec::new();
        }

        let Some(list) = order.next_matching(paragraph, |e| is_tag(e, "ul")) else {
            return Vec::new();
        };

        order
            .subtree(list)
            .map(|i| order.get(i))
            .filter(|e| is_tag(*e, "li"))
            .collect()
    }
}
