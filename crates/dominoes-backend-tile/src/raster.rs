//! Aliased drawing primitives.
//!
//! Shapes take inclusive pixel bounds. Drawing replaces the destination
//! pixel outright; a translucent fill leaves a translucent pixel. Blending
//! happens only when a layer is composited.

use crate::buffer::{GrayscaleBuffer, PixelRect, TextureBuffer};
use crate::color::Color;

/// Fill an axis-aligned rectangle.
pub fn fill_rect(buf: &mut TextureBuffer, rect: PixelRect, color: Color) {
    let rect = buf.clip(rect);
    if rect.is_empty() {
        return;
    }
    for y in rect.y0..=rect.y1 {
        for x in rect.x0..=rect.x1 {
            buf.set(x as u32, y as u32, color);
        }
    }
}

/// True if `(x, y)` lies inside a rounded rectangle.
///
/// Corners are quarter circles of `radius` centred `radius` pixels in from
/// each side; the radius is limited to half the shorter side.
pub fn rounded_rect_contains(rect: PixelRect, radius: i32, x: i32, y: i32) -> bool {
    if rect.is_empty() || !rect.contains(x, y) {
        return false;
    }
    let r = radius
        .min((rect.x1 - rect.x0) / 2)
        .min((rect.y1 - rect.y0) / 2)
        .max(0);
    if r == 0 {
        return true;
    }

    let cx = if x < rect.x0 + r {
        rect.x0 + r
    } else if x > rect.x1 - r {
        rect.x1 - r
    } else {
        return true;
    };
    let cy = if y < rect.y0 + r {
        rect.y0 + r
    } else if y > rect.y1 - r {
        rect.y1 - r
    } else {
        return true;
    };

    let (dx, dy) = ((x - cx) as i64, (y - cy) as i64);
    let r = r as i64;
    dx * dx + dy * dy <= r * r + r
}

/// Fill a rounded rectangle.
pub fn fill_rounded_rect(buf: &mut TextureBuffer, rect: PixelRect, radius: i32, color: Color) {
    let area = buf.clip(rect);
    if area.is_empty() {
        return;
    }
    for y in area.y0..=area.y1 {
        for x in area.x0..=area.x1 {
            if rounded_rect_contains(rect, radius, x, y) {
                buf.set(x as u32, y as u32, color);
            }
        }
    }
}

/// Stroke the outline of a rounded rectangle, `width` pixels inward.
pub fn stroke_rounded_rect(
    buf: &mut TextureBuffer,
    rect: PixelRect,
    radius: i32,
    width: i32,
    color: Color,
) {
    if width <= 0 {
        return;
    }
    let inner = rect.inset(width);
    let inner_radius = radius - width;
    let area = buf.clip(rect);
    if area.is_empty() {
        return;
    }
    for y in area.y0..=area.y1 {
        for x in area.x0..=area.x1 {
            if rounded_rect_contains(rect, radius, x, y)
                && !rounded_rect_contains(inner, inner_radius, x, y)
            {
                buf.set(x as u32, y as u32, color);
            }
        }
    }
}

/// Fill a rounded rectangle into a mask with value 1.0.
pub fn fill_rounded_rect_mask(mask: &mut GrayscaleBuffer, rect: PixelRect, radius: i32) {
    for y in 0..mask.height {
        for x in 0..mask.width {
            if rounded_rect_contains(rect, radius, x as i32, y as i32) {
                mask.set(x, y, 1.0);
            }
        }
    }
}

/// True if `(x, y)` lies inside the ellipse inscribed in `rect`.
pub fn ellipse_contains(rect: PixelRect, x: i32, y: i32) -> bool {
    if rect.is_empty() || !rect.contains(x, y) {
        return false;
    }
    let cx = (rect.x0 + rect.x1) as f64 / 2.0;
    let cy = (rect.y0 + rect.y1) as f64 / 2.0;
    let rx = rect.width() as f64 / 2.0;
    let ry = rect.height() as f64 / 2.0;
    let nx = (x as f64 - cx) / rx;
    let ny = (y as f64 - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

/// Fill the ellipse inscribed in `rect`.
pub fn fill_ellipse(buf: &mut TextureBuffer, rect: PixelRect, color: Color) {
    let area = buf.clip(rect);
    if area.is_empty() {
        return;
    }
    for y in area.y0..=area.y1 {
        for x in area.x0..=area.x1 {
            if ellipse_contains(rect, x, y) {
                buf.set(x as u32, y as u32, color);
            }
        }
    }
}

/// Stroke the ellipse inscribed in `rect`, `width` pixels inward.
pub fn stroke_ellipse(buf: &mut TextureBuffer, rect: PixelRect, width: i32, color: Color) {
    if width <= 0 {
        return;
    }
    let inner = rect.inset(width);
    let area = buf.clip(rect);
    if area.is_empty() {
        return;
    }
    for y in area.y0..=area.y1 {
        for x in area.x0..=area.x1 {
            if ellipse_contains(rect, x, y) && !ellipse_contains(inner, x, y) {
                buf.set(x as u32, y as u32, color);
            }
        }
    }
}
