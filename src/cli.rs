//! CLI argument parsing.
//!
//! The CLI is intentionally thin: one conversion, no subcommands. Everything
//! that shapes the output lives in the specification files and the optional
//! config.

use clap::Parser;
use std::path::PathBuf;

/// Root CLI entrypoint for the converter.
#[derive(Parser, Debug)]
#[command(
    name = "specdoc",
    version,
    about = "Render YAML program specifications as a Word document",
    after_help = "Examples:\n  specdoc -i specs/billing.yaml -o billing.docx\n  specdoc -i 'specs/*.yaml,extra/*.yaml' -o all.docx\n  specdoc -i specs/*.yaml -o styled.docx -c specdoc.yaml -t letterhead.docx"
)]
pub struct RootArgs {
    /// Input specification files: comma-separated glob patterns
    #[arg(short, long, value_name = "PATTERNS")]
    pub input: String,

    /// Output document path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Optional config file overriding the document font
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Optional template document to append to instead of starting fresh
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long)]
    pub debug: bool,
}
