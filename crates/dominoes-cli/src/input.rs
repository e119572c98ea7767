//! Style loading.
//!
//! A run either uses the built-in style or reads one from a JSON file. The
//! loaded style carries its BLAKE3 hash so outputs can be traced back to it.

use dominoes_spec::{style_hash, SpecError, TileStyle};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::commands::json_output::error_codes;

/// Where a style came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSource {
    /// The built-in defaults.
    Default,
    /// A JSON style file.
    File(PathBuf),
}

impl std::fmt::Display for StyleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleSource::Default => write!(f, "built-in"),
            StyleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A style ready for rendering.
#[derive(Debug, Clone)]
pub struct LoadedStyle {
    pub style: TileStyle,
    pub source: StyleSource,
    /// BLAKE3 hash of the style's canonical JSON.
    pub hash: String,
}

/// Errors from loading a style.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read style file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse style file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: SpecError,
    },

    #[error("Failed to hash style: {0}")]
    Hash(SpecError),
}

impl InputError {
    /// Stable code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::Parse { .. } => error_codes::JSON_PARSE,
            InputError::Hash(_) => error_codes::JSON_SERIALIZE,
        }
    }
}

/// Load a style file, or the defaults when `path` is `None`.
pub fn load_style(path: Option<&Path>) -> Result<LoadedStyle, InputError> {
    let (style, source) = match path {
        None => (TileStyle::default(), StyleSource::Default),
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            let style = TileStyle::from_json_str(&content).map_err(|source| InputError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            (style, StyleSource::File(path.to_path_buf()))
        }
    };

    let hash = style_hash(&style).map_err(InputError::Hash)?;
    Ok(LoadedStyle { style, source, hash })
}
