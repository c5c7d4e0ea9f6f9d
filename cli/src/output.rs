#![deny(missing_docs)]

//! # Output
//!
//! Writes extracted requests either through a template, as a human-readable
//! dump (optionally pausing after each request), or as JSON.

use devour_core::{
    render_header, to_json, AppResult, Extraction, RequestDump, RequestModel, TemplateRenderer,
};
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Prompt printed after each dumped request.
pub const CONTINUE_PROMPT: &str = "Continue? [Y/n]";

/// Asks the operator whether to keep going.
///
/// Abstracted so tests can script the answers.
pub trait Confirm {
    /// `false` stops the output; this is a normal exit, not a failure.
    fn proceed(&mut self) -> AppResult<bool>;
}

/// Reads the answer from standard input. Only `n` or `N` stops.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn proceed(&mut self) -> AppResult<bool> {
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(!matches!(answer.trim_end_matches(['\r', '\n']), "n" | "N"))
    }
}

/// Location of the banner printed before templated output.
pub fn header_path(template: &Path) -> PathBuf {
    let mut path = OsString::from(template.as_os_str());
    path.push("_header");
    PathBuf::from(path)
}

/// Reads the banner next to `template`, if there is one.
pub fn read_header(template: &Path) -> AppResult<Option<String>> {
    let path = header_path(template);
    if !path.is_file() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}

/// Writes the banner (if any), then one rendered block per request.
pub fn write_templated(
    out: &mut impl Write,
    extraction: &Extraction,
    renderer: &TemplateRenderer,
    header: Option<&str>,
    program: &str,
) -> AppResult<()> {
    if let Some(header) = header {
        writeln!(
            out,
            "{}",
            render_header(header, program, &extraction.content_digest)
        )?;
    }

    for request in &extraction.requests {
        writeln!(out, "{}", renderer.render(request))?;
    }

    Ok(())
}

/// Writes the human-readable dump.
///
/// With `confirm`, the operator is asked after every request and a negative
/// answer ends the output early.
pub fn write_dump(
    out: &mut impl Write,
    requests: &[RequestModel],
    values: bool,
    mut confirm: Option<&mut dyn Confirm>,
) -> AppResult<()> {
    for request in requests {
        writeln!(out, "{}", RequestDump::new(request, values))?;

        if let Some(confirm) = confirm.as_deref_mut() {
            write!(out, "{}", CONTINUE_PROMPT)?;
            out.flush()?;
            if !confirm.proceed()? {
                break;
            }
        }
    }

    Ok(())
}

/// Writes all requests as one JSON array.
pub fn write_json(out: &mut impl Write, requests: &[RequestModel]) -> AppResult<()> {
    writeln!(out, "{}", to_json(requests)?)?;
    Ok(())
}
