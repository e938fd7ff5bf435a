//! Build command - generates the site

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use folio_core::{Config, config::CONFIG_FILE_NAME};
use folio_generator::{BuildStats, Builder};

/// Run the build command.
///
/// Loads `folio.toml` from `root` unless `config_path` is given, falls back to
/// defaults when the file does not exist, then builds every page.
pub fn run(root: &Path, config_path: Option<&Path>) -> Result<BuildStats> {
    let start = Instant::now();

    let config_path = config_path.map_or_else(|| root.join(CONFIG_FILE_NAME), Path::to_path_buf);
    tracing::info!(root = %root.display(), config = %config_path.display(), "Starting build");

    let config = Config::load_or_default(&config_path).wrap_err("Failed to load configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let content_dir = config.content_dir(root);
    let output_dir = config.output_dir(root);

    let stats = Builder::new(config, &content_dir, &output_dir)
        .build()
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Posts:    {}", stats.posts);
    println!("  Pages:    {}", stats.pages);
    if !stats.skipped.is_empty() {
        println!("  Skipped:  {}", stats.skipped.join(", "));
    }
    println!();
    println!("  Duration: {:.2}s", duration.as_secs_f64());
    println!("  Output:   {}", output_dir.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(stats)
}
