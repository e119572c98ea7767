//! Domino Tile Rendering Backend
//!
//! This crate renders domino tiles as transparent PNGs. Every tile is built
//! by compositing layers onto an RGBA canvas: a gradient face stamped
//! through a rounded mask, an engraved divider, rings of inner shadow and
//! glow, bevelled edges, a soft specular highlight, a corner vignette, the
//! pips, and a blurred drop shadow underneath. The result is cropped to its
//! visible content.
//!
//! # Example
//!
//! ```no_run
//! use dominoes_backend_tile::generate::{generate_tile, png_config_for, save_tile_result};
//! use dominoes_spec::{Orientation, TileKind, TileStyle};
//! use std::path::Path;
//!
//! let style = TileStyle::default();
//! let kind = TileKind::face(3, 5, Orientation::Vertical).unwrap();
//!
//! let result = generate_tile(&kind, &style, &png_config_for(&style)).unwrap();
//! save_tile_result(&result, Path::new("output")).unwrap();
//! ```
//!
//! # Determinism
//!
//! - Same style + same tile = byte-identical PNG
//! - PNG encoding uses fixed compression settings and no timestamps
//! - Drawing primitives replace pixels; only layers blend

pub mod buffer;
pub mod color;
pub mod effects;
pub mod filter;
pub mod generate;
pub mod layer;
pub mod pips;
pub mod png;
pub mod raster;

// Re-export main types for convenience
pub use buffer::{GrayscaleBuffer, PixelRect, TextureBuffer};
pub use color::Color;
pub use generate::{
    generate_tile, png_config_for, render_back, render_face, render_tile, save_tile_result,
    GenerateError, TileResult,
};
pub use layer::Layer;
pub use png::{PngConfig, PngError};
