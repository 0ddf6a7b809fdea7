use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use vizsan_core::input::guard::Limits;

#[derive(Debug, Parser)]
#[command(
    name = "vizsan",
    version,
    about = "Sanitize untrusted visualization scene documents for rendering"
)]
pub struct Args {
    /// Path to the input JSON document; omit or pass `-` to read stdin
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Maximum nesting depth of the input document
    #[arg(long, default_value_t = Limits::default().max_depth)]
    pub max_depth: usize,

    /// Maximum number of JSON values in the input document
    #[arg(long, default_value_t = Limits::default().max_nodes)]
    pub max_nodes: usize,

    /// Maximum input size in bytes
    #[arg(long, default_value_t = Limits::default().max_input_bytes)]
    pub max_input_bytes: u64,
}

impl Args {
    pub fn limits(&self) -> Limits {
        Limits {
            max_depth: self.max_depth,
            max_nodes: self.max_nodes,
            max_input_bytes: self.max_input_bytes,
        }
    }

    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// The sanitized document
    Json,
    /// A JSON report of what was repaired
    Report,
    /// A human-readable repair summary
    Text,
}
