//! Pixel buffers and rectangles.

use crate::color::Color;

/// Rectangle in pixel coordinates with inclusive bounds.
///
/// `x1` and `y1` are the last covered column and row, so a rectangle from
/// `(40, 40)` to `(760, 360)` covers 721 columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelRect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Shrink by `amount` on every side (negative grows).
    pub fn inset(&self, amount: i32) -> Self {
        Self::new(
            self.x0 + amount,
            self.y0 + amount,
            self.x1 - amount,
            self.y1 - amount,
        )
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// True if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// A 2D RGBA buffer.
#[derive(Debug, Clone)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (straight-alpha RGBA, row-major).
    pub data: Vec<Color>,
}

impl TextureBuffer {
    /// Create a new texture buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new fully transparent buffer.
    pub fn new_transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::transparent())
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = color;
    }

    /// The whole buffer as a rectangle.
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Clip a rectangle to the buffer.
    pub fn clip(&self, rect: PixelRect) -> PixelRect {
        let b = self.bounds();
        PixelRect::new(
            rect.x0.max(b.x0),
            rect.y0.max(b.y0),
            rect.x1.min(b.x1),
            rect.y1.min(b.y1),
        )
    }

    /// Alpha-composite `src` over this buffer with its top-left at `(dx, dy)`.
    pub fn composite_over(&mut self, src: &TextureBuffer, dx: i32, dy: i32) {
        let target = self.clip(src.bounds().translate(dx, dy));
        if target.is_empty() {
            return;
        }
        for y in target.y0..=target.y1 {
            for x in target.x0..=target.x1 {
                let s = src.get((x - dx) as u32, (y - dy) as u32);
                if s.a <= 0.0 {
                    continue;
                }
                let d = self.get(x as u32, y as u32);
                self.set(x as u32, y as u32, s.over(&d));
            }
        }
    }

    /// Paste `src` at `(dx, dy)`, mixing by a same-sized mask.
    ///
    /// Unlike compositing, every channel including alpha is interpolated
    /// towards the source by the mask value.
    pub fn paste_masked(&mut self, src: &TextureBuffer, mask: &GrayscaleBuffer, dx: i32, dy: i32) {
        debug_assert_eq!((src.width, src.height), (mask.width, mask.height));
        let target = self.clip(src.bounds().translate(dx, dy));
        if target.is_empty() {
            return;
        }
        for y in target.y0..=target.y1 {
            for x in target.x0..=target.x1 {
                let (sx, sy) = ((x - dx) as u32, (y - dy) as u32);
                let m = mask.get(sx, sy);
                if m <= 0.0 {
                    continue;
                }
                let d = self.get(x as u32, y as u32);
                self.set(x as u32, y as u32, d.lerp(&src.get(sx, sy), m));
            }
        }
    }

    /// Bounding box of pixels whose 8-bit alpha is non-zero.
    pub fn alpha_bbox(&self) -> Option<PixelRect> {
        let mut bbox: Option<PixelRect> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.get(x, y).alpha8() == 0 {
                    continue;
                }
                let (x, y) = (x as i32, y as i32);
                bbox = Some(match bbox {
                    None => PixelRect::new(x, y, x, y),
                    Some(b) => PixelRect::new(b.x0.min(x), b.y0.min(y), b.x1.max(x), b.y1.max(y)),
                });
            }
        }
        bbox
    }

    /// Copy out a rectangle, which must lie inside the buffer.
    pub fn crop(&self, rect: PixelRect) -> TextureBuffer {
        let rect = self.clip(rect);
        let mut out = TextureBuffer::new_transparent(rect.width() as u32, rect.height() as u32);
        for y in 0..out.height {
            let src_row = ((rect.y0 as u32 + y) * self.width + rect.x0 as u32) as usize;
            let dst_row = (y * out.width) as usize;
            out.data[dst_row..dst_row + out.width as usize]
                .copy_from_slice(&self.data[src_row..src_row + out.width as usize]);
        }
        out
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            let rgba = color.to_rgba8();
            bytes.extend_from_slice(&rgba);
        }
        bytes
    }
}

/// Grayscale buffer (single channel), used for masks.
#[derive(Debug, Clone)]
pub struct GrayscaleBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (single channel, row-major).
    pub data: Vec<f64>,
}

impl GrayscaleBuffer {
    /// Create a new grayscale buffer filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = value;
    }
}
