//! Init command - write an example config file

use crate::config::{example_config, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(dir: &Path, force: bool) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        println!(
            "{} Already initialized: {} (use --force to overwrite)",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, example_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Score a file", style("codescope quality <file>").cyan());
    println!("  {} Scan for vulnerabilities", style("codescope security <file> --fixes").cyan());

    Ok(())
}
