//! List command implementation
//!
//! Prints the tiles a generation run would produce, without rendering.

use anyhow::{Context, Result};
use colored::Colorize;
use dominoes_spec::{tile_set, TileSelection, TileSetMode};
use std::process::ExitCode;

use super::json_output::{ListOutput, ListedTile};

/// Build the listing for a set.
pub fn list_tiles(mode: TileSetMode, selection: TileSelection) -> ListOutput {
    let tiles: Vec<ListedTile> = tile_set(mode, selection)
        .into_iter()
        .map(|kind| ListedTile {
            filename: kind.filename(),
            kind,
        })
        .collect();
    ListOutput {
        count: tiles.len(),
        tiles,
    }
}

/// Run the list command
pub fn run(mode: TileSetMode, selection: TileSelection, json_output: bool) -> Result<ExitCode> {
    let listing = list_tiles(mode, selection);

    if json_output {
        let json =
            serde_json::to_string_pretty(&listing).context("Failed to serialize tile list")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    for tile in &listing.tiles {
        println!("{} {}", tile.filename, format!("[{}]", tile.kind).dimmed());
    }
    println!();
    println!("{} {} tiles", "INFO".blue().bold(), listing.count);

    Ok(ExitCode::SUCCESS)
}
