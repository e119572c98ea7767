//! Generate command implementation
//!
//! Renders every tile of a set into an output directory and writes a
//! manifest of what was produced.

use anyhow::{Context, Result};
use colored::Colorize;
use dominoes_backend_tile::{generate_tile, png_config_for, save_tile_result};
use dominoes_spec::{
    tile_set, validate_style, Manifest, ManifestEntry, TileSelection, TileSetMode,
    MANIFEST_FILENAME,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{error_codes, GenerateOutput, JsonError, TileRecord};
use crate::input::load_style;

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the PNGs and manifest are written to
    pub out_dir: PathBuf,
    /// Style file; the built-in style when `None`
    pub style_path: Option<PathBuf>,
    pub mode: TileSetMode,
    pub selection: TileSelection,
    pub write_manifest: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            style_path: None,
            mode: TileSetMode::default(),
            selection: TileSelection::default(),
            write_manifest: true,
        }
    }
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 if the style was unusable or any tile failed
pub fn run(options: &GenerateOptions, json_output: bool, verbose: bool) -> Result<ExitCode> {
    if json_output {
        let output = generate_set(options, |_| {});
        let json =
            serde_json::to_string_pretty(&output).context("Failed to serialize generate output")?;
        println!("{}", json);
        return Ok(exit_code(output.success));
    }

    let start = Instant::now();
    let planned = tile_set(options.mode, options.selection).len();

    println!(
        "{} {}",
        "Output directory:".blue().bold(),
        options.out_dir.display()
    );
    println!(
        "{} {}",
        "Style:".blue().bold(),
        options
            .style_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );
    println!("{} Rendering {} tiles", "INFO".blue().bold(), planned);
    println!();

    let output = generate_set(options, |record| print_record(record, verbose));

    let saved = output.tiles.iter().filter(|t| t.success).count();
    let failed: Vec<_> = output.failed_tiles().collect();

    println!();
    if !output.errors.is_empty() {
        println!("{}", "Errors:".red().bold());
        for error in &output.errors {
            let location = error
                .path
                .as_ref()
                .map(|p| format!(" (at {})", p))
                .unwrap_or_default();
            println!("  {} {}: {}{}", "x".red(), error.code, error.message, location);
        }
        println!();
    }

    println!("{} {}", "Saved:".green().bold(), saved);
    println!("{} {}", "Failed:".red().bold(), failed.len());
    println!(
        "{} {:.2}s",
        "Total runtime:".blue().bold(),
        start.elapsed().as_secs_f64()
    );
    if let Some(hash) = &output.style_hash {
        println!("{} {}", "Style hash:".dimmed(), &hash[..16]);
    }
    if let Some(manifest) = &output.manifest {
        println!("{} {}", "Manifest:".blue().bold(), manifest);
    }

    if !failed.is_empty() {
        println!();
        println!("{}", "Failed tiles:".red().bold());
        for record in failed {
            let message = record
                .error
                .as_ref()
                .map(|e| format!("{}: {}", e.code, e.message))
                .unwrap_or_else(|| "unknown error".to_string());
            println!("  - {}: {}", record.filename, message);
        }
    }

    Ok(exit_code(output.success))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn print_record(record: &TileRecord, verbose: bool) {
    if record.success {
        if verbose {
            println!(
                "{} {} ({}x{}, {})",
                "Saved".green(),
                record.filename,
                record.width.unwrap_or_default(),
                record.height.unwrap_or_default(),
                record
                    .hash
                    .as_deref()
                    .map(|h| &h[..16])
                    .unwrap_or("unknown")
                    .dimmed()
            );
        } else {
            println!("{} {}", "Saved".green(), record.filename);
        }
    } else {
        println!(
            "{} {} - {}",
            "FAILED".red(),
            record.filename,
            record
                .error
                .as_ref()
                .map(|e| e.message.as_str())
                .unwrap_or("unknown error")
        );
    }
}

/// Render and write a tile set, reporting each tile to `on_tile` as it
/// finishes.
///
/// Style problems stop the run before any file is written. A failing tile
/// is recorded and the run moves on to the next one. The manifest lists
/// only the tiles that were written.
pub fn generate_set(
    options: &GenerateOptions,
    mut on_tile: impl FnMut(&TileRecord),
) -> GenerateOutput {
    let mut output = GenerateOutput::new(options.out_dir.display().to_string());

    let loaded = match load_style(options.style_path.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            output.errors.push(JsonError::new(e.code(), e.to_string()));
            return output;
        }
    };
    output.style_hash = Some(loaded.hash.clone());

    if let Err(errors) = validate_style(&loaded.style) {
        output.errors.extend(errors.iter().map(JsonError::from));
        return output;
    }

    if let Err(e) = fs::create_dir_all(&options.out_dir) {
        output.errors.push(JsonError::new(
            error_codes::FILE_WRITE,
            format!(
                "Failed to create output directory {}: {}",
                options.out_dir.display(),
                e
            ),
        ));
        return output;
    }

    let style = &loaded.style;
    let config = png_config_for(style);
    let mut manifest = Manifest::new(loaded.hash.clone());

    for kind in tile_set(options.mode, options.selection) {
        let written = generate_tile(&kind, style, &config)
            .and_then(|result| save_tile_result(&result, &options.out_dir).map(|_| result));

        let record = match written {
            Ok(result) => {
                manifest.push(ManifestEntry {
                    filename: result.filename.clone(),
                    kind: result.kind,
                    width: result.width,
                    height: result.height,
                    hash: result.hash.clone(),
                });
                TileRecord::saved(&result)
            }
            Err(e) => TileRecord::failed(kind, &e),
        };

        on_tile(&record);
        output.tiles.push(record);
    }

    if options.write_manifest {
        let path = options.out_dir.join(MANIFEST_FILENAME);
        let written = manifest
            .to_json_pretty()
            .map_err(|e| JsonError::new(error_codes::JSON_SERIALIZE, e.to_string()))
            .and_then(|json| {
                fs::write(&path, json).map_err(|e| {
                    JsonError::new(
                        error_codes::FILE_WRITE,
                        format!("Failed to write manifest {}: {}", path.display(), e),
                    )
                })
            });
        match written {
            Ok(()) => output.manifest = Some(path.display().to_string()),
            Err(e) => output.errors.push(e),
        }
    }

    output.success = output.errors.is_empty() && output.tiles.iter().all(|t| t.success);
    output
}
