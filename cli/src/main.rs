#![deny(missing_docs)]

//! # Devour CLI
//!
//! Parses a REST API reference page into request descriptors and prints them,
//! either through a user template (`--template`) or as a dump for review.
//!
//! Output modes:
//! - **template**: every `$REQUEST_*` placeholder substituted per request,
//!   preceded by `<template>_header` when that file exists.
//! - **text**: human-readable dump; when reading a real file, the operator is
//!   asked whether to continue after each request.
//! - **json**: the grouped requests as a JSON array.

use clap::{Parser, ValueEnum};
use devour_core::render::DEFAULT_DECORATION;
use devour_core::{extract, AppError, AppResult, Decoration, ExtractionConfig, TemplateRenderer};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::input::InputSource;
use crate::output::{Confirm, StdinConfirm};

mod input;
mod output;

/// Output format used when no template is given.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable dump with interactive pauses.
    Text,
    /// JSON array of requests.
    Json,
}

#[derive(Parser, Debug)]
#[clap(author, about = "Turn REST API reference pages into code through templates")]
struct Cli {
    /// Path to a HTML page specifying the API, or `-` to read from stdin.
    api_file: PathBuf,

    /// Trace every discovered request and parameter to stderr.
    #[clap(short, long)]
    verbose: bool,

    /// Also dump the descriptions of parameters.
    #[clap(short = 'V', long)]
    values: bool,

    /// Output template for the request models.
    #[clap(short, long, env = "DEVOUR_TEMPLATE")]
    template: Option<PathBuf>,

    /// How to decorate strings in templates (printf-style, `%s` is the value).
    #[clap(short, long, env = "DEVOUR_DECORATION", default_value = DEFAULT_DECORATION)]
    decoration: String,

    /// Output format when no template is given.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Additional endpoint heading to leave out (repeatable).
    #[clap(long)]
    skip_heading: Vec<String>,

    /// Additional `<METHOD> <URL>` known to document a JSON body (repeatable).
    #[clap(long)]
    json_endpoint: Vec<String>,
}

impl Cli {
    fn extraction_config(&self) -> ExtractionConfig {
        let config = self
            .skip_heading
            .iter()
            .fold(ExtractionConfig::default(), |config, heading| {
                config.with_skip_heading(heading.as_str())
            });

        self.json_endpoint
            .iter()
            .fold(config, |config, request| config.with_json_endpoint(request.as_str()))
    }
}

/// Default filter directives; `DEVOUR_LOG` replaces them.
///
/// Verbose output covers this workspace only. Parser internals (html5ever,
/// selectors) stay at `warn`.
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,devour_core=debug,devour=debug"
    } else {
        "warn"
    }
}

fn init_tracing(verbose: bool) -> AppResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("DEVOUR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::General(format!("Failed to initialize tracing: {}", e)))
}

/// Extracts every request from the input, then writes them in the selected mode.
///
/// Nothing is written before the whole document has been extracted.
fn run(cli: &Cli, program: &str, out: &mut impl Write, confirm: &mut dyn Confirm) -> AppResult<()> {
    let source = InputSource::from_arg(&cli.api_file);
    let html = source.read_to_string()?;
    let extraction = extract(&html, &cli.extraction_config())?;

    if let Some(template_path) = &cli.template {
        let template = fs::read_to_string(template_path)?;
        let header = output::read_header(template_path)?;
        let renderer = TemplateRenderer::new(template, Decoration::new(cli.decoration.as_str()));
        return output::write_templated(out, &extraction, &renderer, header.as_deref(), program);
    }

    match cli.format {
        OutputFormat::Json => output::write_json(out, &extraction.requests),
        OutputFormat::Text => {
            let confirm = source.is_file().then_some(confirm);
            output::write_dump(out, &extraction.requests, cli.values, confirm)
        }
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &program, &mut out, &mut StdinConfirm)
}
