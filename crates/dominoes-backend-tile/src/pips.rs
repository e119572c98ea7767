//! Pip layout and drawing.

use dominoes_spec::{Orientation, TileStyle};

use crate::buffer::{PixelRect, TextureBuffer};
use crate::color::Color;
use crate::layer::Layer;
use crate::raster::{fill_ellipse, stroke_ellipse};

const PIP_SHADOW_OFFSET: i32 = 2;
const PIP_SHADOW: [u8; 4] = [180, 180, 180, 200];
const PIP_HIGHLIGHT: [u8; 4] = [255, 255, 255, 110];
const PIP_RIM_SHADOW: [u8; 4] = [0, 0, 0, 110];
const PIP_GLOW: [u8; 4] = [100, 100, 100, 50];
const PIP_GLOW_WIDTH: i32 = 2;
const PIP_SPOT_BLUR: f64 = 1.0;

/// Which half of the tile a value is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Half {
    /// Left half of a horizontal tile, top half of a vertical one.
    First,
    /// Right half of a horizontal tile, bottom half of a vertical one.
    Second,
}

/// The named anchor points of one half.
struct Anchors {
    left: i32,
    center: i32,
    right: i32,
    top: i32,
    middle: i32,
    bottom: i32,
}

impl Anchors {
    fn new(half: Half, orientation: Orientation, style: &TileStyle) -> Self {
        let (w, h) = style.canvas_size(orientation);
        let (w, h) = (w as i32, h as i32);
        let [pad_long, pad_short] = style.pip_padding.map(|p| p as i32);

        match orientation {
            Orientation::Horizontal => {
                let mid = w / 2;
                let (region_left, region_right) = match half {
                    Half::First => (0, mid),
                    Half::Second => (mid, w),
                };
                Self {
                    left: region_left + pad_long,
                    center: (region_left + region_right) / 2,
                    right: region_right - pad_long,
                    top: pad_short,
                    middle: h / 2,
                    bottom: h - pad_short,
                }
            }
            Orientation::Vertical => {
                let mid = h / 2;
                let (region_top, region_bottom) = match half {
                    Half::First => (0, mid),
                    Half::Second => (mid, h),
                };
                Self {
                    left: pad_short,
                    center: w / 2,
                    right: w - pad_short,
                    top: region_top + pad_long,
                    middle: (region_top + region_bottom) / 2,
                    bottom: region_bottom - pad_long,
                }
            }
        }
    }
}

/// Canvas positions of the pips for `value` in one half of a tile.
///
/// Values above six have no layout and yield no pips.
pub fn pip_positions(value: u8, half: Half, orientation: Orientation, style: &TileStyle) -> Vec<(i32, i32)> {
    let a = Anchors::new(half, orientation, style);
    match value {
        1 => vec![(a.center, a.middle)],
        2 => vec![(a.left, a.top), (a.right, a.bottom)],
        3 => vec![(a.left, a.top), (a.center, a.middle), (a.right, a.bottom)],
        4 => vec![
            (a.left, a.top),
            (a.right, a.top),
            (a.left, a.bottom),
            (a.right, a.bottom),
        ],
        5 => vec![
            (a.left, a.top),
            (a.right, a.top),
            (a.center, a.middle),
            (a.left, a.bottom),
            (a.right, a.bottom),
        ],
        6 => vec![
            (a.left, a.top),
            (a.right, a.top),
            (a.left, a.middle),
            (a.right, a.middle),
            (a.left, a.bottom),
            (a.right, a.bottom),
        ],
        _ => Vec::new(),
    }
}

/// Draw one engraved pip centred on `(x, y)`.
pub fn draw_pip(tile: &mut TextureBuffer, x: i32, y: i32, style: &TileStyle) {
    let r = style.dot_radius as i32;
    let dot = PixelRect::new(x - r, y - r, x + r, y + r);

    let highlight = PixelRect::new(x - r + 6, y - r + 6, x - r + 18, y - r + 14);
    let mut highlight_layer = Layer::for_blur(highlight, PIP_SPOT_BLUR);
    let local = highlight_layer.local(highlight);
    fill_ellipse(&mut highlight_layer.buffer, local, Color::from_rgba8(PIP_HIGHLIGHT));

    let rim = PixelRect::new(x + r - 18, y + r - 14, x + r - 6, y + r - 6);
    let mut rim_layer = Layer::for_blur(rim, PIP_SPOT_BLUR);
    let local = rim_layer.local(rim);
    fill_ellipse(&mut rim_layer.buffer, local, Color::from_rgba8(PIP_RIM_SHADOW));

    let glow = dot.inset(-PIP_GLOW_WIDTH);
    let mut glow_layer = Layer::around(glow, 0);
    let local = glow_layer.local(glow);
    stroke_ellipse(
        &mut glow_layer.buffer,
        local,
        PIP_GLOW_WIDTH,
        Color::from_rgba8(PIP_GLOW),
    );

    let shadow = dot.translate(PIP_SHADOW_OFFSET, PIP_SHADOW_OFFSET);
    let mut dot_layer = Layer::around(dot, PIP_SHADOW_OFFSET);
    let local_shadow = dot_layer.local(shadow);
    let local_dot = dot_layer.local(dot);
    fill_ellipse(&mut dot_layer.buffer, local_shadow, Color::from_rgba8(PIP_SHADOW));
    fill_ellipse(&mut dot_layer.buffer, local_dot, Color::from_rgba8(style.dot_color));

    highlight_layer.blurred(PIP_SPOT_BLUR).composite_onto(tile);
    rim_layer.blurred(PIP_SPOT_BLUR).composite_onto(tile);
    glow_layer.composite_onto(tile);
    dot_layer.composite_onto(tile);
}

/// Draw both values of a face.
pub fn draw_pips(
    tile: &mut TextureBuffer,
    first: u8,
    second: u8,
    orientation: Orientation,
    style: &TileStyle,
) {
    for (value, half) in [(first, Half::First), (second, Half::Second)] {
        for (x, y) in pip_positions(value, half, orientation, style) {
            draw_pip(tile, x, y, style);
        }
    }
}
