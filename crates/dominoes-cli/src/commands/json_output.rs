//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `generate`, `list` and `validate`.

use dominoes_backend_tile::{GenerateError, TileResult};
use dominoes_spec::{BackendError, TileKind, ValidationError};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Validation errors pass their own `E0xx` codes through and backend errors
/// keep their `TILE_xxx` codes.
pub mod error_codes {
    /// Style file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Style file is not valid style JSON
    pub const JSON_PARSE: &str = "CLI_002";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_003";
    /// Output directory or manifest could not be written
    pub const FILE_WRITE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002", "TILE_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Path to the offending style field, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Backend error category (e.g., "tile")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            category: None,
        }
    }
}

impl From<&ValidationError> for JsonError {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.code().to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
            category: None,
        }
    }
}

impl From<&GenerateError> for JsonError {
    fn from(error: &GenerateError) -> Self {
        Self {
            category: Some(error.category().to_string()),
            ..Self::new(error.code(), error.message())
        }
    }
}

/// Outcome of one tile in a generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TileRecord {
    pub filename: String,
    pub kind: TileKind,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// BLAKE3 hash of the written PNG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl TileRecord {
    pub fn saved(result: &TileResult) -> Self {
        Self {
            filename: result.filename.clone(),
            kind: result.kind,
            success: true,
            width: Some(result.width),
            height: Some(result.height),
            hash: Some(result.hash.clone()),
            error: None,
        }
    }

    pub fn failed(kind: TileKind, error: &GenerateError) -> Self {
        Self {
            filename: kind.filename(),
            kind,
            success: false,
            width: None,
            height: None,
            hash: None,
            error: Some(error.into()),
        }
    }
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// True when the style was usable and every tile was written
    pub success: bool,
    pub out_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_hash: Option<String>,
    pub tiles: Vec<TileRecord>,
    /// Path of the written manifest, if one was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
    /// Run-level errors (style loading, validation, manifest)
    pub errors: Vec<JsonError>,
}

impl GenerateOutput {
    pub fn new(out_dir: impl Into<String>) -> Self {
        Self {
            success: false,
            out_dir: out_dir.into(),
            style_hash: None,
            tiles: Vec::new(),
            manifest: None,
            errors: Vec::new(),
        }
    }

    pub fn failed_tiles(&self) -> impl Iterator<Item = &TileRecord> {
        self.tiles.iter().filter(|t| !t.success)
    }
}

/// Output of `validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_hash: Option<String>,
    pub errors: Vec<JsonError>,
}

/// One planned tile in `list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedTile {
    pub filename: String,
    pub kind: TileKind,
}

/// Output of `list --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOutput {
    pub count: usize,
    pub tiles: Vec<ListedTile>,
}
