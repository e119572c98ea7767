//! Manifest describing the output of a generation run.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::tile::TileKind;

/// Current manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

/// File name of the manifest written next to the tiles.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Summary of every tile written in one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Manifest format version.
    pub version: u32,
    /// BLAKE3 hash of the style used.
    pub style_hash: String,
    /// One entry per written tile, in generation order.
    pub tiles: Vec<ManifestEntry>,
}

/// A single generated tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub kind: TileKind,
    /// Width after trimming.
    pub width: u32,
    /// Height after trimming.
    pub height: u32,
    /// BLAKE3 hash of the PNG file.
    pub hash: String,
}

impl Manifest {
    pub fn new(style_hash: impl Into<String>) -> Self {
        Self {
            version: MANIFEST_VERSION,
            style_hash: style_hash.into(),
            tiles: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.tiles.push(entry);
    }

    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }
}
