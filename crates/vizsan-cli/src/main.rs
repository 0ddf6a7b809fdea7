use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vizsan_core::error::SanitizeError;
use vizsan_core::inspect;
use vizsan_core::input::read::{read_input, read_stdin};
use vizsan_core::report::{model::ToolInfo, render};

mod args;

/// Exit code for input rejected by a structural limit.
const EXIT_LIMIT: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if err.downcast_ref::<SanitizeError>().is_some() {
                ExitCode::from(EXIT_LIMIT)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(args: &args::Args) -> Result<()> {
    let limits = args.limits();

    let input = match args.input_path() {
        Some(path) => read_input(path, limits.max_input_bytes)?,
        None => read_stdin(limits.max_input_bytes)?,
    };

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let inspection = inspect(input, tool, &limits)?;

    let mut output = match (&args.format, args.pretty) {
        (args::OutputFormat::Json, false) => serde_json::to_string(&inspection.document)?,
        (args::OutputFormat::Json, true) => serde_json::to_string_pretty(&inspection.document)?,
        (args::OutputFormat::Report, false) => serde_json::to_string(&inspection.report)?,
        (args::OutputFormat::Report, true) => serde_json::to_string_pretty(&inspection.report)?,
        (args::OutputFormat::Text, _) => render::render_text(&inspection.report),
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }

    match &args.out {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => print!("{output}"),
    }

    Ok(())
}
