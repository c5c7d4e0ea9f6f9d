#![deny(missing_docs)]

//! # Parser Module
//!
//! Turns an API reference page into `RequestModel`s.
//!
//! - **classifier**: header vs. ordinary parameter heuristics.
//! - **params**: splitting a list line into name and description.
//! - **walker**: locating endpoint headings and their sub-sections.

pub mod classifier;
pub mod params;
pub mod walker;

pub use classifier::looks_like_header;
pub use params::parse_param;
pub use walker::SectionWalker;
