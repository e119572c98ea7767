//! Style command implementation
//!
//! Emits the built-in style as JSON, as a starting point for custom styles.

use anyhow::{Context, Result};
use colored::Colorize;
use dominoes_spec::TileStyle;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Run the style command
///
/// # Arguments
/// * `output` - File to write; stdout when `None`
pub fn run(output: Option<&str>) -> Result<ExitCode> {
    let json = TileStyle::default()
        .to_json_pretty()
        .context("Failed to serialize default style")?;

    match output {
        Some(path) => {
            write_style(Path::new(path), &json)?;
            println!("{} {}", "Wrote default style to".green().bold(), path);
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}

fn write_style(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write style: {}", path.display()))
}
