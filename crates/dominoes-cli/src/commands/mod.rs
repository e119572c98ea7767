//! CLI command implementations

pub mod generate;
pub mod json_output;
pub mod list;
pub mod style;
pub mod validate;

use dominoes_spec::{TileSelection, TileSetMode};

/// Accepted values of `--only`.
pub const SELECTION_VALUES: [&str; 3] = ["faces", "backs", "all"];

/// Parse an `--only` value.
pub fn parse_selection(value: &str) -> anyhow::Result<TileSelection> {
    match value {
        "faces" => Ok(TileSelection::Faces),
        "backs" => Ok(TileSelection::Backs),
        "all" => Ok(TileSelection::All),
        other => anyhow::bail!(
            "unknown selection: {} (expected faces, backs, or all)",
            other
        ),
    }
}

/// Map `--ordered` onto a set mode.
pub fn set_mode(ordered: bool) -> TileSetMode {
    if ordered {
        TileSetMode::Ordered
    } else {
        TileSetMode::Unique
    }
}
