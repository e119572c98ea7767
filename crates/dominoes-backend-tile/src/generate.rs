//! Main entry point for tile generation.
//!
//! Each tile goes through the same layered pipeline: gradient face and
//! border, divider, decorative rings and highlights, pips, drop shadow and
//! finally a trim to the visible content.

use std::path::{Path, PathBuf};
use thiserror::Error;

use dominoes_spec::{
    validate_style, BackDesign, BackendError, Orientation, Rgba8, TileKind, TileStyle,
    MAX_PIP_VALUE,
};

use crate::buffer::TextureBuffer;
use crate::effects::{
    bevel_edges, corner_vignette, divider, drop_shadow, face_base, inner_glow, inner_shadow,
    specular_highlight, trim,
};
use crate::pips::draw_pips;
use crate::png::{self, PngConfig, PngError};

/// Errors from tile generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    #[error("Invalid pip value {0} (expected 0-6)")]
    InvalidPipValue(u8),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidStyle(_) => "TILE_001",
            GenerateError::InvalidPipValue(_) => "TILE_002",
            GenerateError::Png(_) => "TILE_003",
            GenerateError::Io(_) => "TILE_004",
        }
    }

    fn category(&self) -> &'static str {
        "tile"
    }
}

/// An encoded tile ready to be written.
#[derive(Debug, Clone)]
pub struct TileResult {
    pub kind: TileKind,
    /// Output file name, like `domino_3_5_v.png`.
    pub filename: String,
    /// Encoded PNG bytes.
    pub png_data: Vec<u8>,
    /// Width in pixels after trimming.
    pub width: u32,
    /// Height in pixels after trimming.
    pub height: u32,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
}

fn check_style(style: &TileStyle) -> Result<(), GenerateError> {
    validate_style(style).map_err(|errors| {
        let joined = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        GenerateError::InvalidStyle(joined)
    })
}

/// Everything up to the pips: a decorated face on a transparent canvas.
fn decorated_face(
    orientation: Orientation,
    style: &TileStyle,
    top: Rgba8,
    bottom: Rgba8,
    with_divider: bool,
) -> TextureBuffer {
    let (w, h) = style.canvas_size(orientation);
    let mut tile = TextureBuffer::new_transparent(w, h);

    face_base(&mut tile, style, top, bottom);
    if with_divider {
        divider(&mut tile, orientation, style);
    }
    inner_shadow(&mut tile, style);
    inner_glow(&mut tile, style);
    bevel_edges(&mut tile, style);
    specular_highlight(&mut tile, style);
    corner_vignette(&mut tile, style);
    tile
}

fn finish(tile: TextureBuffer, style: &TileStyle) -> TextureBuffer {
    trim(drop_shadow(&tile, style))
}

/// Render a face showing `first` and `second`.
///
/// `first` lands in the left half of a horizontal tile and the top half of
/// a vertical one. The returned image is already trimmed.
pub fn render_face(
    first: u8,
    second: u8,
    orientation: Orientation,
    style: &TileStyle,
) -> Result<TextureBuffer, GenerateError> {
    check_style(style)?;
    for value in [first, second] {
        if value > MAX_PIP_VALUE {
            return Err(GenerateError::InvalidPipValue(value));
        }
    }

    let mut tile = decorated_face(orientation, style, style.base_light, style.base_dark, true);
    draw_pips(&mut tile, first, second, orientation, style);
    Ok(finish(tile, style))
}

/// Render a tile back. Backs are always horizontal and carry no divider.
pub fn render_back(design: BackDesign, style: &TileStyle) -> Result<TextureBuffer, GenerateError> {
    check_style(style)?;
    let (top, bottom) = style.back_gradient(design);
    let tile = decorated_face(Orientation::Horizontal, style, top, bottom, false);
    Ok(finish(tile, style))
}

/// Render any tile of the set.
pub fn render_tile(kind: &TileKind, style: &TileStyle) -> Result<TextureBuffer, GenerateError> {
    match *kind {
        TileKind::Face {
            first,
            second,
            orientation,
        } => render_face(first, second, orientation, style),
        TileKind::Back { design } => render_back(design, style),
    }
}

/// Render and encode a tile.
pub fn generate_tile(
    kind: &TileKind,
    style: &TileStyle,
    config: &PngConfig,
) -> Result<TileResult, GenerateError> {
    let image = render_tile(kind, style)?;
    let (png_data, hash) = png::write_rgba_to_vec_with_hash(&image, config)?;

    Ok(TileResult {
        kind: *kind,
        filename: kind.filename(),
        png_data,
        width: image.width,
        height: image.height,
        hash,
    })
}

/// PNG settings for a style: default compression and the style's DPI.
pub fn png_config_for(style: &TileStyle) -> PngConfig {
    PngConfig::default().with_dpi(style.dpi)
}

/// Write a generated tile into `output_dir`, creating it if needed.
pub fn save_tile_result(result: &TileResult, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(&result.filename);
    std::fs::write(&path, &result.png_data)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(GenerateError::InvalidStyle(String::new()).code(), "TILE_001");
        assert_eq!(GenerateError::InvalidPipValue(9).code(), "TILE_002");
        assert_eq!(
            GenerateError::Io(std::io::Error::other("x")).code(),
            "TILE_004"
        );
        assert_eq!(GenerateError::InvalidPipValue(9).category(), "tile");
    }

    #[test]
    fn invalid_style_is_rejected_before_rendering() {
        let style = TileStyle {
            margin: 300,
            ..TileStyle::default()
        };
        let err = render_back(BackDesign::Player, &style).unwrap_err();
        match err {
            GenerateError::InvalidStyle(msg) => assert!(msg.contains("E002")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pip_value_out_of_range_is_rejected() {
        let err = render_face(2, 7, Orientation::Horizontal, &TileStyle::default()).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidPipValue(7)));
    }

    #[test]
    fn face_is_trimmed_to_content() {
        let style = TileStyle::default();
        let image = render_face(3, 5, Orientation::Horizontal, &style).unwrap();

        // Only the soft shadow reaches into the margin.
        assert!(image.width <= 800 && image.width > 720);
        assert!(image.height <= 400 && image.height > 320);
        assert!(image.alpha_bbox().is_some());
        assert_eq!(image.get(image.width / 2, image.height / 2).alpha8(), 255);
    }

    #[test]
    fn vertical_face_is_portrait() {
        let image = render_face(1, 6, Orientation::Vertical, &TileStyle::default()).unwrap();
        assert!(image.height > image.width);
    }

    #[test]
    fn back_gradient_override_changes_output() {
        let mut style = TileStyle::default();
        let plain = generate_tile(&TileKind::back(BackDesign::Ai), &style, &png_config_for(&style))
            .unwrap();
        style.backs.ai.light = Some([200, 60, 60, 255]);
        let tinted = generate_tile(&TileKind::back(BackDesign::Ai), &style, &png_config_for(&style))
            .unwrap();

        assert_eq!(plain.filename, "domino_back_ai.png");
        assert_ne!(plain.hash, tinted.hash);
    }

    #[test]
    fn save_writes_under_filename() {
        let dir = tempfile::tempdir().unwrap();
        let result = TileResult {
            kind: TileKind::back(BackDesign::Player),
            filename: "domino_back.png".to_string(),
            png_data: vec![1, 2, 3],
            width: 1,
            height: 1,
            hash: String::new(),
        };
        let path = save_tile_result(&result, &dir.path().join("nested")).unwrap();
        assert_eq!(path.file_name().unwrap(), "domino_back.png");
        assert_eq!(std::fs::read(path).unwrap(), vec![1, 2, 3]);
    }
}
