#![deny(missing_docs)]

//! Splitting of raw list lines into `Param`s.

use crate::model::param::{Param, ParamType};

/// Candidate delimiters, highest priority first.
const SPLITTERS: [char; 3] = ['–', '-', ':'];

/// Sentinel parameter name kept verbatim with no description.
const HOST_CONFIG: &str = "HostConfig";

/// Splits a raw list line into a named parameter of type `ty`.
///
/// - `HostConfig` on its own is accepted as is, whatever `ty` is.
/// - Filters split on the first `=`.
/// - Everything else splits on the first occurrence of the first delimiter
///   of `–`, `-`, `:` present in the line.
///
/// Returns `None` when no delimiter applies.
///
/// # Examples
/// ```
/// use devour_core::model::ParamType;
/// use devour_core::parser::parse_param;
///
/// let p = parse_param("all – Show all containers", ParamType::Query).unwrap();
/// assert_eq!(p.name, "all");
/// assert_eq!(p.description, "Show all containers");
/// ```
pub fn parse_param(line: &str, ty: ParamType) -> Option<Param> {
    if line == HOST_CONFIG {
        return Some(Param::new(HOST_CONFIG, "", ty));
    }

    if ty == ParamType::QueryFilter {
        let (name, description) = line.split_once('=')?;
        return Some(Param::new(name.trim(), description.trim(), ty));
    }

    SPLITTERS
        .iter()
        .find_map(|&splitter| line.split_once(splitter))
        .map(|(name, description)| Param::new(name.trim(), description.trim(), ty))
}
