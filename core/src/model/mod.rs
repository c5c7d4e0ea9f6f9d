#![deny(missing_docs)]

//! # Request Models
//!
//! - **param**: classified parameters and their categories.
//! - **request**: one endpoint as discovered by the section walker.
//! - **api_request**: the per-category view consumed by generated code.

pub mod api_request;
pub mod param;
pub mod request;

pub use api_request::ApiRequest;
pub use param::{Param, ParamType};
pub use request::{RequestMethod, RequestModel, RestVarExtent};
