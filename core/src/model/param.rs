#![deny(missing_docs)]

//! Classified parameters.

use serde::Serialize;
use std::fmt;

/// Category of a parameter line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// Not classified yet. Never attached to a `RequestModel`.
    #[default]
    Invalid,
    /// URL query parameter.
    Query,
    /// Field of the JSON request body.
    Json,
    /// HTTP status code the endpoint may answer with.
    Status,
    /// `key=value` pair listed under a `filters` query parameter.
    QueryFilter,
    /// Header-like parameter (`Content-Type`, `X-Registry-Auth`, ...).
    Header,
}

impl ParamType {
    /// Short tag used in trace output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Invalid => "INVALID",
            ParamType::Query => "QUERY",
            ParamType::Json => "JSON",
            ParamType::Status => "STATUS",
            ParamType::QueryFilter => "FILTER",
            ParamType::Header => "HEADER",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Parameter name (left of the delimiter).
    pub name: String,
    /// Free-text description (right of the delimiter), possibly empty.
    pub description: String,
    /// Category.
    #[serde(rename = "type")]
    pub ty: ParamType,
}

impl Param {
    /// Creates a parameter from its parts.
    pub fn new(name: impl Into<String>, description: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ty,
        }
    }
}
