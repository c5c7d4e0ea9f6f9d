#![deny(missing_docs)]

//! One endpoint as discovered by the section walker.
//!
//! A `RequestModel` is filled in while the walker visits the sub-sections of
//! its heading and is left alone once it has been appended to the endpoint list.

use crate::model::param::{Param, ParamType};
use crate::parser::params::parse_param;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    /// Unrecognized method token.
    #[default]
    Invalid,
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl RequestMethod {
    /// Maps a method token through the closed lookup table.
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => RequestMethod::Get,
            "POST" => RequestMethod::Post,
            "PUT" => RequestMethod::Put,
            "DELETE" => RequestMethod::Delete,
            _ => RequestMethod::Invalid,
        }
    }

    /// Canonical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Invalid => "INVALID",
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Span of a parenthesized placeholder such as `(id)` inside a URL template.
///
/// Offsets count characters, `start` inclusive and `end` exclusive, so the
/// span covers the parentheses themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestVarExtent {
    /// Offset of the opening parenthesis.
    pub start: usize,
    /// Offset one past the closing parenthesis.
    pub end: usize,
}

impl RestVarExtent {
    /// Creates an extent from character offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The placeholder name inside `query`, without the parentheses.
    pub fn name_in(&self, query: &str) -> String {
        query
            .chars()
            .skip(self.start + 1)
            .take(self.end.saturating_sub(self.start + 2))
            .collect()
    }
}

impl fmt::Display for RestVarExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// Finds every parenthesized placeholder in a URL template, left to right.
pub fn rest_var_extents(query: &str) -> Vec<RestVarExtent> {
    static REST_VAR_RE: OnceLock<Regex> = OnceLock::new();
    let rest_var_re = REST_VAR_RE.get_or_init(|| Regex::new(r"\(.+?\)").expect("Invalid regex"));

    rest_var_re
        .find_iter(query)
        .map(|m| {
            // regex reports byte offsets
            let start = query[..m.start()].chars().count();
            let end = start + m.as_str().chars().count();
            RestVarExtent::new(start, end)
        })
        .collect()
}

/// Everything known about one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestModel {
    method: RequestMethod,
    query: String,
    rest_var_extents: Vec<RestVarExtent>,
    params: Vec<Param>,
    status_codes: Vec<Param>,
    description: String,
}

impl RequestModel {
    /// Starts a model for the endpoint heading `description`.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Sets the HTTP method from its token.
    pub fn set_method(&mut self, token: &str) {
        self.method = RequestMethod::from_token(token);
    }

    /// Sets the URL template and derives its REST variable extents.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.rest_var_extents = rest_var_extents(&self.query);
    }

    /// Parses a raw list line as `ty` and attaches the result.
    ///
    /// Lines that do not split are dropped and `None` is returned.
    pub fn add_raw_param(&mut self, line: &str, ty: ParamType) -> Option<&Param> {
        match parse_param(line, ty) {
            Some(param) => self.add_parsed_param(param),
            None => {
                debug!(line, kind = %ty, "Dropping unparsable parameter line");
                None
            }
        }
    }

    /// Attaches an already classified parameter.
    ///
    /// Status codes are recorded in `status_codes` as well as in `params`.
    /// Parameters of type `Invalid` are rejected.
    pub fn add_parsed_param(&mut self, param: Param) -> Option<&Param> {
        match param.ty {
            ParamType::Invalid => {
                debug!(name = %param.name, "Rejecting unclassified parameter");
                return None;
            }
            ParamType::Status => self.status_codes.push(param.clone()),
            _ => {}
        }
        self.params.push(param);
        self.params.last()
    }

    /// All parameters of the given category, in document order.
    pub fn params_by_type(&self, ty: ParamType) -> impl Iterator<Item = &Param> + '_ {
        self.params.iter().filter(move |p| p.ty == ty)
    }

    /// HTTP method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// URL template as written in the document.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Placeholder spans in `query`.
    pub fn rest_var_extents(&self) -> &[RestVarExtent] {
        &self.rest_var_extents
    }

    /// Every attached parameter, in document order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Status codes only.
    pub fn status_codes(&self) -> &[Param] {
        &self.status_codes
    }

    /// The endpoint heading text.
    pub fn description(&self) -> &str {
        &self.description
    }
}
