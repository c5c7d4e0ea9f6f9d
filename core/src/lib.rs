#![deny(missing_docs)]

//! # Devour Core
//!
//! Turns a REST API reference page (HTML) into request descriptors and renders
//! them through plain-text templates.
//!
//! Pipeline: `document` parses the page and finds the content body,
//! `parser::walker` visits each endpoint heading, `parser::params` and
//! `parser::classifier` classify the list items beneath it, `model` holds the
//! result, and `render` / `dump` turn it into text.

/// Shared error types.
pub mod error;

/// Extraction settings.
pub mod config;

/// Parsed reference pages and the extraction entry point.
pub mod document;

/// Request descriptors.
pub mod model;

/// Endpoint and parameter extraction.
pub mod parser;

/// Template rendering.
pub mod render;

/// Human-readable dump.
pub mod dump;

pub use config::ExtractionConfig;
pub use document::{extract, ApiDocument, Extraction};
pub use dump::RequestDump;
pub use error::{AppError, AppResult};
pub use model::{ApiRequest, Param, ParamType, RequestMethod, RequestModel, RestVarExtent};
pub use parser::{looks_like_header, parse_param, SectionWalker};
pub use render::{render_header, to_json, Decoration, TemplateRenderer};
