//! Folio CLI
//!
//! Builds the portfolio site from Markdown posts and YAML pages.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Folio.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Static site generator for a personal portfolio"
)]
struct Cli {
    /// Site root holding the content directory
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Path to configuration file (defaults to folio.toml under the root)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    folio::cmd::build::run(&cli.root, cli.config.as_deref())?;

    Ok(())
}
