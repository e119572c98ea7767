//! Offscreen layers.
//!
//! A layer is a transparent buffer placed somewhere on a larger canvas. It
//! only needs to be as large as the shapes drawn on it plus room for blur,
//! which keeps per-pip effects cheap on a full-size tile.

use crate::buffer::{PixelRect, TextureBuffer};
use crate::filter::{box_radius_for_sigma, gaussian_blur};

#[derive(Debug, Clone)]
pub struct Layer {
    pub buffer: TextureBuffer,
    /// Canvas x of the buffer's left column.
    pub x: i32,
    /// Canvas y of the buffer's top row.
    pub y: i32,
}

impl Layer {
    /// A layer covering the whole canvas.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            buffer: TextureBuffer::new_transparent(width, height),
            x: 0,
            y: 0,
        }
    }

    /// A layer covering `rect` grown by `pad` on every side.
    pub fn around(rect: PixelRect, pad: i32) -> Self {
        let area = rect.inset(-pad.max(0));
        Self {
            buffer: TextureBuffer::new_transparent(
                area.width().max(1) as u32,
                area.height().max(1) as u32,
            ),
            x: area.x0,
            y: area.y0,
        }
    }

    /// A layer around `rect` with enough room to blur by `sigma` unclipped.
    pub fn for_blur(rect: PixelRect, sigma: f64) -> Self {
        let spread = 3 * box_radius_for_sigma(sigma) as i32;
        Self::around(rect, spread + 1)
    }

    /// Convert a canvas rectangle to layer coordinates.
    pub fn local(&self, rect: PixelRect) -> PixelRect {
        rect.translate(-self.x, -self.y)
    }

    pub fn blurred(self, sigma: f64) -> Self {
        Self {
            buffer: gaussian_blur(&self.buffer, sigma),
            ..self
        }
    }

    /// Alpha-composite this layer onto a canvas.
    pub fn composite_onto(&self, canvas: &mut TextureBuffer) {
        canvas.composite_over(&self.buffer, self.x, self.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::raster::fill_rect;

    #[test]
    fn around_grows_by_padding() {
        let layer = Layer::around(PixelRect::new(10, 20, 19, 29), 5);
        assert_eq!((layer.x, layer.y), (5, 15));
        assert_eq!((layer.buffer.width, layer.buffer.height), (20, 20));
        assert_eq!(
            layer.local(PixelRect::new(10, 20, 19, 29)),
            PixelRect::new(5, 5, 14, 14)
        );
    }

    #[test]
    fn for_blur_leaves_room_for_spread() {
        let layer = Layer::for_blur(PixelRect::new(0, 0, 9, 9), 1.0);
        assert_eq!(layer.x, -4);
        assert_eq!(layer.buffer.width, 18);
    }

    #[test]
    fn composite_places_layer_on_canvas() {
        let mut canvas = TextureBuffer::new_transparent(30, 30);
        let rect = PixelRect::new(10, 10, 12, 12);
        let mut layer = Layer::around(rect, 2);
        let local = layer.local(rect);
        fill_rect(&mut layer.buffer, local, Color::white());
        layer.composite_onto(&mut canvas);

        assert_eq!(canvas.get(10, 10), Color::white());
        assert_eq!(canvas.get(12, 12), Color::white());
        assert_eq!(canvas.get(9, 10), Color::transparent());
    }
}
