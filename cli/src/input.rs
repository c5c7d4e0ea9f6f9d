#![deny(missing_docs)]

//! # Input Selection
//!
//! The API page comes from a named file, or from standard input when the
//! path is `-`.

use devour_core::AppResult;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Path value selecting standard input.
pub const STDIN_MARKER: &str = "-";

/// Where the API page is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Selects the source from the command-line path value.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_MARKER {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    /// Whether the source is a real file (and the operator can be prompted).
    pub fn is_file(&self) -> bool {
        matches!(self, InputSource::File(_))
    }

    /// Reads the whole document.
    pub fn read_to_string(&self) -> AppResult<String> {
        match self {
            InputSource::Stdin => {
                debug!("Opening: standard input");
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
            InputSource::File(path) => {
                debug!(path = %path.display(), "Opening");
                Ok(fs::read_to_string(path)?)
            }
        }
    }
}
