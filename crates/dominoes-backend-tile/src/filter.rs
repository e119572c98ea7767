//! Blur filters.

use crate::buffer::TextureBuffer;
use crate::color::Color;

/// Number of box passes used to approximate a Gaussian.
const BOX_PASSES: usize = 3;

/// Box radius whose repeated application approximates a Gaussian of `sigma`.
pub fn box_radius_for_sigma(sigma: f64) -> usize {
    if sigma.is_nan() || sigma <= 0.0 {
        return 0;
    }
    let ideal_width = (12.0 * sigma * sigma / BOX_PASSES as f64 + 1.0).sqrt();
    (((ideal_width - 1.0) / 2.0).round() as usize).max(1)
}

/// Approximate Gaussian blur of an RGBA buffer.
///
/// Each straight-alpha channel is blurred on its own, so a light shape on
/// transparent black picks up a dark fringe. Edges are clamped.
pub fn gaussian_blur(input: &TextureBuffer, sigma: f64) -> TextureBuffer {
    let r = box_radius_for_sigma(sigma);
    if r == 0 || input.data.is_empty() {
        return input.clone();
    }

    let w = input.width as usize;
    let h = input.height as usize;

    let mut channels = [
        input.data.iter().map(|p| p.r).collect::<Vec<f64>>(),
        input.data.iter().map(|p| p.g).collect(),
        input.data.iter().map(|p| p.b).collect(),
        input.data.iter().map(|p| p.a).collect(),
    ];

    let mut scratch = vec![0.0; w * h];
    for channel in channels.iter_mut() {
        for _ in 0..BOX_PASSES {
            box_blur_h(channel, &mut scratch, w, h, r);
            box_blur_v(&scratch, channel, w, h, r);
        }
    }

    let [red, green, blue, alpha] = &channels;
    let data = (0..w * h)
        .map(|i| Color::rgba(red[i], green[i], blue[i], alpha[i]))
        .collect();

    TextureBuffer {
        width: input.width,
        height: input.height,
        data,
    }
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Horizontal box blur pass.
fn box_blur_h(src: &[f64], dst: &mut [f64], w: usize, h: usize, r: usize) {
    let d = (2 * r + 1) as f64;
    let r = r as isize;
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        let mut sum: f64 = (-r..=r).map(|k| row[clamp_index(k, w)]).sum();
        for x in 0..w {
            dst[y * w + x] = sum / d;
            let xi = x as isize;
            sum += row[clamp_index(xi + r + 1, w)] - row[clamp_index(xi - r, w)];
        }
    }
}

/// Vertical box blur pass.
fn box_blur_v(src: &[f64], dst: &mut [f64], w: usize, h: usize, r: usize) {
    let d = (2 * r + 1) as f64;
    let r = r as isize;
    for x in 0..w {
        let mut sum: f64 = (-r..=r).map(|k| src[clamp_index(k, h) * w + x]).sum();
        for y in 0..h {
            dst[y * w + x] = sum / d;
            let yi = y as isize;
            sum += src[clamp_index(yi + r + 1, h) * w + x] - src[clamp_index(yi - r, h) * w + x];
        }
    }
}
