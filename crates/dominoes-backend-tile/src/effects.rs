//! Decorative layers that give the flat face its pseudo-3D look.
//!
//! Every effect takes the tile canvas and the style. Offsets are measured
//! from the face edge, which sits `style.margin` pixels inside the canvas.

use dominoes_spec::{Orientation, Rgba8, TileStyle};

use crate::buffer::{GrayscaleBuffer, PixelRect, TextureBuffer};
use crate::color::Color;
use crate::layer::Layer;
use crate::raster::{
    fill_ellipse, fill_rect, fill_rounded_rect, fill_rounded_rect_mask, stroke_rounded_rect,
};

/// Inner shadow rings: inset from the face edge, ring count, starting alpha, alpha step.
const INNER_SHADOW: (i32, i32, i32, i32) = (2, 6, 130, 18);
const INNER_SHADOW_RGB: [u8; 3] = [180, 180, 180];

/// Inner glow rings: inset, ring count, starting alpha, alpha step, radius reduction.
const INNER_GLOW: (i32, i32, i32, i32, i32) = (5, 3, 80, 25, 5);
const INNER_GLOW_RGB: [u8; 3] = [240, 240, 240];

/// Bevel rings: ring count, starting alpha, alpha step.
const BEVEL: (i32, i32, i32) = (3, 90, 25);
const BEVEL_SHADE_RGB: [u8; 3] = [120, 120, 120];

/// Specular ellipse relative to the face's top-left corner.
const SPECULAR_RECT: PixelRect = PixelRect::new(20, 10, 240, 130);
const SPECULAR_ALPHA: u8 = 35;
const SPECULAR_BLUR: f64 = 10.0;

/// Corner vignette footprint, step count, per-step shrink, peak alpha, blur.
const VIGNETTE_SIZE: (i32, i32) = (180, 120);
const VIGNETTE_STEPS: i32 = 24;
const VIGNETTE_SHRINK: (i32, i32) = (4, 3);
const VIGNETTE_ALPHA: f64 = 25.0;
const VIGNETTE_BLUR: f64 = 6.0;

const DIVIDER_SHADOW: Rgba8 = [180, 180, 180, 150];
const DIVIDER_HIGHLIGHT: Rgba8 = [255, 255, 255, 120];

fn with_alpha(rgb: [u8; 3], alpha: i32) -> Color {
    Color::from_rgba8([rgb[0], rgb[1], rgb[2], alpha.clamp(0, 255) as u8])
}

/// Outer rectangle of the face on a `width` x `height` canvas.
pub fn face_rect(width: u32, height: u32, style: &TileStyle) -> PixelRect {
    let m = style.margin as i32;
    PixelRect::new(m, m, width as i32 - m, height as i32 - m)
}

/// Vertical gradient of `width` x `height`.
///
/// Each channel of row `y` is the truncated interpolation between `top`
/// and `bottom` at `y / (height - 1)`.
pub fn vertical_gradient(width: u32, height: u32, top: Rgba8, bottom: Rgba8) -> TextureBuffer {
    let mut buf = TextureBuffer::new_transparent(width, height);
    let span = (height.max(2) - 1) as f64;
    for y in 0..height {
        let ratio = y as f64 / span;
        let mut rgba = [0u8; 4];
        for (c, out) in rgba.iter_mut().enumerate() {
            let v = top[c] as f64 * (1.0 - ratio) + bottom[c] as f64 * ratio;
            *out = v as u8;
        }
        let color = Color::from_rgba8(rgba);
        for x in 0..width {
            buf.set(x, y, color);
        }
    }
    buf
}

/// Paint the gradient face through a rounded mask and draw its border.
pub fn face_base(tile: &mut TextureBuffer, style: &TileStyle, top: Rgba8, bottom: Rgba8) {
    let m = style.margin;
    let radius = style.corner_radius as i32;
    let face_w = tile.width.saturating_sub(2 * m);
    let face_h = tile.height.saturating_sub(2 * m);
    if face_w == 0 || face_h == 0 {
        return;
    }

    let gradient = vertical_gradient(face_w, face_h, top, bottom);
    let mut mask = GrayscaleBuffer::new(face_w, face_h, 0.0);
    fill_rounded_rect_mask(
        &mut mask,
        PixelRect::new(0, 0, face_w as i32 - 1, face_h as i32 - 1),
        radius,
    );
    tile.paste_masked(&gradient, &mask, m as i32, m as i32);

    let outline = face_rect(tile.width, tile.height, style);
    stroke_rounded_rect(
        tile,
        outline,
        radius,
        style.border_thickness as i32,
        Color::from_rgba8(style.border_color),
    );
}

/// Engraved line separating the two halves.
pub fn divider(tile: &mut TextureBuffer, orientation: Orientation, style: &TileStyle) {
    let (w, h) = (tile.width as i32, tile.height as i32);
    let half = style.split_line_thickness as i32 / 2;
    let inset = style.divider_margin as i32;

    let mut layer = Layer::full(tile.width, tile.height);
    let (shadow, highlight, line) = match orientation {
        Orientation::Horizontal => {
            let (x1, x2) = (w / 2 - half, w / 2 + half);
            (
                PixelRect::new(x1 + 1, inset + 1, x2 + 1, h - inset + 1),
                PixelRect::new(x1 - 2, inset, x1 - 1, h - inset),
                PixelRect::new(x1, inset, x2, h - inset),
            )
        }
        Orientation::Vertical => {
            let (y1, y2) = (h / 2 - half, h / 2 + half);
            (
                PixelRect::new(inset + 1, y1 + 1, w - inset + 1, y2 + 1),
                PixelRect::new(inset, y1 - 2, w - inset, y1 - 1),
                PixelRect::new(inset, y1, w - inset, y2),
            )
        }
    };

    fill_rect(&mut layer.buffer, shadow, Color::from_rgba8(DIVIDER_SHADOW));
    fill_rect(&mut layer.buffer, highlight, Color::from_rgba8(DIVIDER_HIGHLIGHT));
    fill_rect(&mut layer.buffer, line, Color::from_rgba8(style.divider_color));
    layer.composite_onto(tile);
}

/// Fading grey rings just inside the face edge, drawn directly on the tile.
pub fn inner_shadow(tile: &mut TextureBuffer, style: &TileStyle) {
    let (inset, rings, alpha, step) = INNER_SHADOW;
    let face = face_rect(tile.width, tile.height, style);
    let radius = style.corner_radius as i32;
    for i in 0..rings {
        stroke_rounded_rect(
            tile,
            face.inset(inset + i),
            radius - i,
            1,
            with_alpha(INNER_SHADOW_RGB, alpha - i * step),
        );
    }
}

/// Faint light rings inside the inner shadow, drawn directly on the tile.
pub fn inner_glow(tile: &mut TextureBuffer, style: &TileStyle) {
    let (inset, rings, alpha, step, shrink) = INNER_GLOW;
    let face = face_rect(tile.width, tile.height, style);
    let radius = style.corner_radius as i32;
    for i in 0..rings {
        stroke_rounded_rect(
            tile,
            face.inset(inset + i),
            radius - i - shrink,
            1,
            with_alpha(INNER_GLOW_RGB, alpha - i * step),
        );
    }
}

/// Light and shade rings on the face edge, composited as two layers.
pub fn bevel_edges(tile: &mut TextureBuffer, style: &TileStyle) {
    let (rings, alpha, step) = BEVEL;
    let face = face_rect(tile.width, tile.height, style);
    let radius = style.corner_radius as i32;

    let mut highlight = Layer::full(tile.width, tile.height);
    let mut shade = Layer::full(tile.width, tile.height);
    for i in 0..rings {
        let ring = face.inset(i);
        let a = alpha - i * step;
        stroke_rounded_rect(&mut highlight.buffer, ring, radius - i, 1, with_alpha([255; 3], a));
        stroke_rounded_rect(&mut shade.buffer, ring, radius - i, 1, with_alpha(BEVEL_SHADE_RGB, a));
    }
    highlight.composite_onto(tile);
    shade.composite_onto(tile);
}

/// Soft gloss spot near the top-left of the face.
pub fn specular_highlight(tile: &mut TextureBuffer, style: &TileStyle) {
    let m = style.margin as i32;
    let spot = SPECULAR_RECT.translate(m, m);
    let mut layer = Layer::for_blur(spot, SPECULAR_BLUR);
    let local = layer.local(spot);
    fill_ellipse(
        &mut layer.buffer,
        local,
        with_alpha([255; 3], SPECULAR_ALPHA as i32),
    );
    layer.blurred(SPECULAR_BLUR).composite_onto(tile);
}

/// Directional darkening towards the bottom-right face corner.
///
/// Nested rectangles share the corner; each smaller one overwrites the
/// last with a lower alpha, so the darkest band is the outer edge.
pub fn corner_vignette(tile: &mut TextureBuffer, style: &TileStyle) {
    let m = style.margin as i32;
    let (w, h) = (tile.width as i32, tile.height as i32);
    let (cw, ch) = VIGNETTE_SIZE;
    let (sx, sy) = VIGNETTE_SHRINK;
    let footprint = PixelRect::new(w - m - cw, h - m - ch, w - m, h - m);

    let mut layer = Layer::for_blur(footprint, VIGNETTE_BLUR);
    for i in 0..VIGNETTE_STEPS {
        let alpha = (VIGNETTE_ALPHA * (1.0 - i as f64 / VIGNETTE_STEPS as f64)) as i32;
        let rect = PixelRect::new(footprint.x0 + i * sx, footprint.y0 + i * sy, w - m, h - m);
        let local = layer.local(rect);
        fill_rect(&mut layer.buffer, local, with_alpha([0; 3], alpha));
    }
    layer.blurred(VIGNETTE_BLUR).composite_onto(tile);
}

/// Place the tile on a transparent canvas above a soft drop shadow.
pub fn drop_shadow(tile: &TextureBuffer, style: &TileStyle) -> TextureBuffer {
    let mut canvas = TextureBuffer::new_transparent(tile.width, tile.height);
    let [dx, dy] = style.drop_shadow.offset;
    let footprint = face_rect(tile.width, tile.height, style).translate(dx, dy);

    let mut shadow = Layer::for_blur(footprint, style.drop_shadow.blur);
    let local = shadow.local(footprint);
    fill_rounded_rect(
        &mut shadow.buffer,
        local,
        style.corner_radius as i32,
        Color::from_rgba8(style.shadow_color),
    );
    shadow
        .blurred(style.drop_shadow.blur)
        .composite_onto(&mut canvas);

    canvas.composite_over(tile, 0, 0);
    canvas
}

/// Crop to visible content. A fully transparent image is returned as is.
pub fn trim(image: TextureBuffer) -> TextureBuffer {
    match image.alpha_bbox() {
        Some(bbox) => image.crop(bbox),
        None => image,
    }
}
