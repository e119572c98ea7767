//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same tile always encodes to the
//! same bytes, which keeps manifest hashes stable across runs.

use std::io::Write;
use dominoes_spec::hash_bytes;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType, PixelDimensions, Unit};
use thiserror::Error;

use crate::buffer::TextureBuffer;

/// Metres per inch, for converting DPI into the pHYs chunk's unit.
const METERS_PER_INCH: f64 = 0.0254;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
    /// Physical resolution written to the pHYs chunk, if any.
    pub dpi: Option<u32>,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
            dpi: None,
        }
    }
}

impl PngConfig {
    /// Record a physical resolution in the output.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }
}

/// Convert dots per inch to pixels per metre.
pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}

/// Write an RGBA texture buffer to any writer.
pub fn write_rgba_to_writer<W: Write>(
    buffer: &TextureBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{}",
            buffer.width, buffer.height
        )));
    }

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    if let Some(dpi) = config.dpi {
        let ppm = dpi_to_pixels_per_meter(dpi);
        encoder.set_pixel_dims(Some(PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: Unit::Meter,
        }));
    }

    // The png crate doesn't add timestamps by default
    let mut png_writer = encoder.write_header()?;

    let data = buffer.to_rgba8();
    png_writer.write_image_data(&data)?;

    Ok(())
}

/// Write to a Vec<u8> and return its BLAKE3 hash.
pub fn write_rgba_to_vec_with_hash(
    buffer: &TextureBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(buffer, &mut data, config)?;
    let hash = hash_bytes(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn gradient_buffer() -> TextureBuffer {
        let mut buffer = TextureBuffer::new_transparent(64, 64);
        for y in 0..64 {
            for x in 0..64 {
                let r = x as f64 / 63.0;
                let a = y as f64 / 63.0;
                buffer.set(x, y, Color::rgba(r, 0.5, 0.5, a));
            }
        }
        buffer
    }

    #[test]
    fn test_rgba_deterministic() {
        let buffer = gradient_buffer();
        let config = PngConfig::default();

        let (data1, hash1) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
        assert_eq!(hash1, hash_bytes(&data1));
    }

    #[test]
    fn test_dpi_conversion() {
        assert_eq!(dpi_to_pixels_per_meter(300), 11811);
        assert_eq!(dpi_to_pixels_per_meter(72), 2835);
    }

    #[test]
    fn test_dpi_written_to_phys_chunk() {
        let buffer = gradient_buffer();
        let config = PngConfig::default().with_dpi(300);
        let (data, _) = write_rgba_to_vec_with_hash(&buffer, &config).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(data));
        let reader = decoder.read_info().unwrap();
        let dims = reader.info().pixel_dims.expect("pHYs chunk");
        assert_eq!(dims.xppu, 11811);
        assert_eq!(dims.yppu, 11811);
        assert_eq!(dims.unit, Unit::Meter);
    }

    #[test]
    fn test_roundtrip_pixels() {
        let buffer = gradient_buffer();
        let (data, _) = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(data));
        let mut reader = decoder.read_info().unwrap();
        let mut out = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut out).unwrap();

        assert_eq!((info.width, info.height), (64, 64));
        assert_eq!(&out[..info.buffer_size()], buffer.to_rgba8().as_slice());
    }

    #[test]
    fn test_empty_buffer_rejected() {
        let buffer = TextureBuffer::new_transparent(0, 4);
        let err = write_rgba_to_vec_with_hash(&buffer, &PngConfig::default()).unwrap_err();
        assert!(matches!(err, PngError::InvalidDimensions(_)));
    }
}
