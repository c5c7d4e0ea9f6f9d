#![deny(missing_docs)]

//! Human-readable dump of a request, used when no template is given.

use crate::model::{ParamType, RequestModel};
use std::fmt;

/// Category blocks in print order.
const GROUPS: [(ParamType, &str); 5] = [
    (ParamType::Query, "Params"),
    (ParamType::QueryFilter, "Filters"),
    (ParamType::Json, "JSON"),
    (ParamType::Status, "Status codes"),
    (ParamType::Header, "Headers"),
];

/// Displays a `RequestModel` as a multi-line block.
///
/// With `values` set, each parameter is followed by its description.
pub struct RequestDump<'a> {
    model: &'a RequestModel,
    values: bool,
}

impl<'a> RequestDump<'a> {
    /// Wraps `model` for display.
    pub fn new(model: &'a RequestModel, values: bool) -> Self {
        Self { model, values }
    }
}

impl fmt::Display for RequestDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model;

        writeln!(f, "- RequestModel:")?;
        writeln!(f, "  Query:")?;
        writeln!(f, "   {} {} ", model.method(), model.query())?;

        if !model.rest_var_extents().is_empty() {
            write!(f, "\n  REST Param:\n")?;
            for extent in model.rest_var_extents() {
                writeln!(f, "   {} at {}", extent.name_in(model.query()), extent)?;
            }
        }

        for (ty, header) in GROUPS {
            let lines: Vec<String> = model
                .params_by_type(ty)
                .map(|p| {
                    if self.values {
                        format!("{}  {}", p.name, p.description)
                    } else {
                        p.name.clone()
                    }
                })
                .collect();

            if !lines.is_empty() {
                write!(f, "\n  {}:\n   {}\n", header, lines.join("\n   "))?;
            }
        }

        Ok(())
    }
}
