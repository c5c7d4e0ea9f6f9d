#![deny(missing_docs)]

//! # Template Rendering
//!
//! Substitutes the `$REQUEST_*` placeholders of a user template with the
//! fields of one request. The template language is plain text: whatever the
//! template is written in (Python, Go, Markdown...) is what comes out.
//!
//! Supported placeholders:
//! - `$REQUEST_DESCRIPTION`, `$REQUEST_TYPE`, `$REQUEST_URL`: decorated scalars.
//! - `$REQUEST_SUB`: the REST variable extents, e.g. `[(12, 16)]`.
//! - `$REQUEST_GET_PARAMETERS`, `$REQUEST_FILTERS`, `$REQUEST_JSON_PARAMETERS`,
//!   `$REQUEST_STATUS_CODES`, `$REQUEST_HEADER_PARAMETERS`: comma-joined
//!   decorated parameter names.

use crate::error::{AppError, AppResult};
use crate::model::{ApiRequest, Param, ParamType, RequestModel, RestVarExtent};

/// Default decoration: single-quote wrapping.
pub const DEFAULT_DECORATION: &str = "'%s'";

/// Printf-style substitution: each `%s` takes the next value, `%%` is a
/// literal percent. A `%s` without a value left is kept as is.
pub fn format_positional(format: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut values = values.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s') => {
                chars.next();
                match values.next() {
                    Some(value) => out.push_str(value),
                    None => out.push_str("%s"),
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

/// How scalar values and parameter names are written into templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    format: String,
}

impl Default for Decoration {
    fn default() -> Self {
        Self::new(DEFAULT_DECORATION)
    }
}

impl Decoration {
    /// Creates a decoration from a printf-style format holding one `%s`.
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// The format string.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Decorates `value` as is.
    pub fn apply(&self, value: &str) -> String {
        format_positional(&self.format, &[value])
    }

    /// Escapes single quotes, then decorates.
    pub fn apply_escaped(&self, value: &str) -> String {
        self.apply(&value.replace('\'', "\\'"))
    }

    /// Decorated names of `params`, comma-joined.
    pub fn join_names(&self, params: &[Param]) -> String {
        params
            .iter()
            .map(|p| self.apply(&p.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Literal rendering of an extent list: `[(12, 16), (20, 24)]`.
pub fn format_extents(extents: &[RestVarExtent]) -> String {
    let parts: Vec<String> = extents.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Renders requests through a fixed template.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    template: String,
    decoration: Decoration,
}

impl TemplateRenderer {
    /// Creates a renderer for `template`.
    pub fn new(template: impl Into<String>, decoration: Decoration) -> Self {
        Self {
            template: template.into(),
            decoration,
        }
    }

    /// Renders one request. The model is left untouched.
    pub fn render(&self, model: &RequestModel) -> String {
        let request = ApiRequest::from(model);
        let deco = &self.decoration;

        // Order matters: substituted values are visible to later placeholders.
        let substitutions = [
            ("$REQUEST_DESCRIPTION", deco.apply_escaped(&request.desc)),
            ("$REQUEST_TYPE", deco.apply_escaped(request.method.as_str())),
            ("$REQUEST_URL", deco.apply_escaped(&request.url)),
            ("$REQUEST_SUB", format_extents(&request.url_sub)),
            (
                "$REQUEST_GET_PARAMETERS",
                deco.join_names(request.group(ParamType::Query)),
            ),
            (
                "$REQUEST_FILTERS",
                deco.join_names(request.group(ParamType::QueryFilter)),
            ),
            (
                "$REQUEST_JSON_PARAMETERS",
                deco.join_names(request.group(ParamType::Json)),
            ),
            (
                "$REQUEST_STATUS_CODES",
                deco.join_names(request.group(ParamType::Status)),
            ),
            (
                "$REQUEST_HEADER_PARAMETERS",
                deco.join_names(request.group(ParamType::Header)),
            ),
        ];

        substitutions
            .iter()
            .fold(self.template.clone(), |out, (token, value)| {
                out.replace(token, value)
            })
    }
}

/// Renders the `<template>_header` banner: the first `%s` is the program
/// identifier, the second the content digest.
pub fn render_header(header: &str, program: &str, content_digest: &str) -> String {
    format_positional(header, &[program, content_digest])
}

/// Serializes the grouped view of every request as a pretty JSON array.
pub fn to_json(requests: &[RequestModel]) -> AppResult<String> {
    let grouped: Vec<ApiRequest> = requests.iter().map(ApiRequest::from).collect();
    serde_json::to_string_pretty(&grouped).map_err(|e| AppError::Json(e.to_string()))
}
