//! Domino Tile Spec Library
//!
//! This crate provides the types shared by the tile renderer and the CLI:
//! the style document that drives rendering, the enumeration of tiles in a
//! set, style validation, and the manifest written alongside generated PNGs.
//!
//! # Example
//!
//! ```
//! use dominoes_spec::{tile_set, validate_style, TileSelection, TileSetMode, TileStyle};
//!
//! let style = TileStyle::default();
//! assert!(validate_style(&style).is_ok());
//!
//! let tiles = tile_set(TileSetMode::Unique, TileSelection::All);
//! assert_eq!(tiles.len(), 58);
//! assert_eq!(tiles[0].filename(), "domino_0_0.png");
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types and validation error codes
//! - [`style`]: Palette and geometry parameters
//! - [`tile`]: Tile kinds, file naming, and set enumeration
//! - [`validation`]: Style validation
//! - [`manifest`]: Manifest of a generation run
//! - [`hash`]: BLAKE3 hashing helpers

pub mod error;
pub mod hash;
pub mod manifest;
pub mod style;
pub mod tile;
pub mod validation;

pub use error::{BackendError, ErrorCode, SpecError, ValidationError};
pub use hash::{hash_bytes, style_hash};
pub use manifest::{Manifest, ManifestEntry, MANIFEST_FILENAME, MANIFEST_VERSION};
pub use style::{BackGradient, BackStyles, DropShadow, Rgba8, TileStyle};
pub use tile::{
    tile_set, BackDesign, Orientation, TileKind, TileSelection, TileSetMode, MAX_PIP_VALUE,
};
pub use validation::{validate_style, MAX_CANVAS_DIMENSION, MAX_SHADOW_BLUR};
