//! specdoc: renders YAML program specifications as Word documents.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod docx;
mod render;
mod spec;

use cli::RootArgs;
use config::RenderConfig;
use docx::DocWriter;

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.debug);
    run(&args)
}

fn run(args: &RootArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    let files = spec::resolve_patterns(&args.input)?;
    let loaded = files
        .iter()
        .map(|path| spec::load_file(path))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!("rendering {} specification file(s)", loaded.len());

    let mut writer = DocWriter::create(args.template.as_deref(), config)?;
    render::render_document(&mut writer, &loaded);
    writer.save(&args.output)?;
    tracing::info!("wrote {}", args.output.display());
    Ok(())
}

/// Logs go to stderr so the terminal stays readable next to shell
/// redirection; `RUST_LOG` overrides the flag-derived level.
fn init_tracing(debug: bool) {
    let default_level = if debug { "specdoc=debug" } else { "specdoc=info" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
