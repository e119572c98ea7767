//! Tile style: the palette and geometry that drive rendering.
//!
//! A style is a JSON document. Every field is optional; missing fields fall
//! back to the reference palette, so `{}` is a valid style.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::tile::{BackDesign, Orientation};

/// 8-bit straight-alpha RGBA colour.
pub type Rgba8 = [u8; 4];

/// Complete set of rendering parameters for a tile set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TileStyle {
    /// Canvas width of a horizontal tile in pixels.
    pub width: u32,

    /// Canvas height of a horizontal tile in pixels.
    pub height: u32,

    /// Transparent margin between the canvas edge and the face.
    pub margin: u32,

    /// Corner radius of the face.
    pub corner_radius: u32,

    /// Outline width of the face border.
    pub border_thickness: u32,

    /// Thickness of the line separating the two halves.
    pub split_line_thickness: u32,

    /// Inset of the divider from the face's long edges.
    pub divider_margin: u32,

    /// Pip radius.
    pub dot_radius: u32,

    /// Pip inset from the edges of a half, as `[long axis, short axis]`.
    pub pip_padding: [u32; 2],

    /// Gradient colour at the top of the face.
    pub base_light: Rgba8,

    /// Gradient colour at the bottom of the face.
    pub base_dark: Rgba8,

    /// Face outline colour.
    pub border_color: Rgba8,

    /// Drop shadow fill colour.
    pub shadow_color: Rgba8,

    /// Pip fill colour.
    pub dot_color: Rgba8,

    /// Divider fill colour.
    pub divider_color: Rgba8,

    /// Drop shadow geometry.
    pub drop_shadow: DropShadow,

    /// Physical resolution recorded in the PNG.
    pub dpi: u32,

    /// Gradient overrides for the back designs.
    pub backs: BackStyles,
}

impl Default for TileStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            margin: 40,
            corner_radius: 30,
            border_thickness: 1,
            split_line_thickness: 4,
            divider_margin: 70,
            dot_radius: 24,
            pip_padding: [110, 90],
            base_light: [250, 250, 250, 255],
            base_dark: [235, 235, 235, 255],
            border_color: [255, 255, 255, 255],
            shadow_color: [0, 0, 0, 50],
            dot_color: [30, 30, 30, 255],
            divider_color: [30, 30, 30, 255],
            drop_shadow: DropShadow::default(),
            dpi: 300,
            backs: BackStyles::default(),
        }
    }
}

impl TileStyle {
    /// Parse a style from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Canvas size `(width, height)` for the given orientation.
    pub fn canvas_size(&self, orientation: Orientation) -> (u32, u32) {
        match orientation {
            Orientation::Horizontal => (self.width, self.height),
            Orientation::Vertical => (self.height, self.width),
        }
    }

    /// Face size `(width, height)` for the given orientation.
    pub fn face_size(&self, orientation: Orientation) -> (u32, u32) {
        let (w, h) = self.canvas_size(orientation);
        (
            w.saturating_sub(2 * self.margin),
            h.saturating_sub(2 * self.margin),
        )
    }

    /// Gradient `(top, bottom)` used for a back design.
    pub fn back_gradient(&self, design: BackDesign) -> (Rgba8, Rgba8) {
        let over = match design {
            BackDesign::Player => &self.backs.player,
            BackDesign::Ai => &self.backs.ai,
        };
        (
            over.light.unwrap_or(self.base_light),
            over.dark.unwrap_or(self.base_dark),
        )
    }
}

/// Drop shadow cast below the tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DropShadow {
    /// Shadow offset `[x, y]` in pixels.
    pub offset: [i32; 2],

    /// Gaussian blur standard deviation in pixels.
    pub blur: f64,
}

impl Default for DropShadow {
    fn default() -> Self {
        Self {
            offset: [0, 10],
            blur: 20.0,
        }
    }
}

/// Per-design gradient overrides for tile backs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackStyles {
    /// The player's back (`domino_back.png`).
    pub player: BackGradient,

    /// The opponent's back (`domino_back_ai.png`).
    pub ai: BackGradient,
}

/// Optional replacement for the face gradient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackGradient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<Rgba8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<Rgba8>,
}
