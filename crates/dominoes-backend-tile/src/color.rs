//! Color utilities for tile rendering.

/// Straight-alpha RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Fully transparent black, the background of every layer.
    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Linearly interpolate between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }

    /// Create from 8-bit RGBA.
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0] as f64 / 255.0,
            g: rgba[1] as f64 / 255.0,
            b: rgba[2] as f64 / 255.0,
            a: rgba[3] as f64 / 255.0,
        }
    }

    /// Alpha after 8-bit quantization.
    pub fn alpha8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Porter-Duff source-over: `self` drawn on top of `dst`.
    pub fn over(&self, dst: &Color) -> Color {
        let src_a = self.a;
        let dst_a = dst.a;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a < 0.0001 {
            return Color::transparent();
        }

        Color::rgba(
            (self.r * src_a + dst.r * dst_a * (1.0 - src_a)) / out_a,
            (self.g * src_a + dst.g * dst_a * (1.0 - src_a)) / out_a,
            (self.b * src_a + dst.b * dst_a * (1.0 - src_a)) / out_a,
            out_a,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::transparent()
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_rgba8(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::white();

        let mid = black.lerp(&white, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-10);
        assert!((mid.g - 0.5).abs() < 1e-10);
        assert!((mid.b - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_rgba8_roundtrip_exact() {
        for rgba in [[30, 30, 30, 255], [180, 180, 180, 130], [0, 0, 0, 50]] {
            assert_eq!(Color::from_rgba8(rgba).to_rgba8(), rgba);
        }
    }

    #[test]
    fn test_over_opaque_source_wins() {
        let dst = Color::from_rgba8([250, 250, 250, 255]);
        let src = Color::from_rgba8([30, 30, 30, 255]);
        assert_eq!(src.over(&dst).to_rgba8(), [30, 30, 30, 255]);
    }

    #[test]
    fn test_over_transparent_source_keeps_destination() {
        let dst = Color::from_rgba8([10, 20, 30, 200]);
        assert_eq!(Color::transparent().over(&dst).to_rgba8(), dst.to_rgba8());
    }

    #[test]
    fn test_over_onto_transparent_keeps_source() {
        let src = Color::from_rgba8([0, 0, 0, 50]);
        assert_eq!(src.over(&Color::transparent()).to_rgba8(), [0, 0, 0, 50]);
    }

    #[test]
    fn test_over_accumulates_alpha() {
        let half = Color::rgba(1.0, 1.0, 1.0, 0.5);
        let out = half.over(&half);
        assert!((out.a - 0.75).abs() < 1e-10);
    }
}
