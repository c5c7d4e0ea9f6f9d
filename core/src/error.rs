//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Only conditions that abort a run live here. Structural gaps in the
/// source document (missing sections, unparsable lines) are skipped by the
/// walker and never surface as errors.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The content-body container was not found in the parsed document.
    /// Holds the selector that matched nothing.
    #[from(ignore)]
    #[display("The content element `{_0}` was not found")]
    ContentNotFound(String),

    /// A configured CSS selector could not be parsed.
    #[from(ignore)]
    #[display("Invalid selector: {_0}")]
    Selector(String),

    /// Serialization of request descriptors failed.
    #[from(ignore)]
    #[display("JSON Error: {_0}")]
    Json(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
