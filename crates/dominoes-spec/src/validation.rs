//! Style validation.
//!
//! Validation collects every problem instead of stopping at the first, so a
//! hand-edited style file can be fixed in one pass.

use crate::error::{ErrorCode, ValidationError};
use crate::style::TileStyle;

/// Largest accepted canvas dimension in pixels.
pub const MAX_CANVAS_DIMENSION: u32 = 8192;

/// Largest accepted drop shadow blur sigma in pixels.
pub const MAX_SHADOW_BLUR: f64 = 256.0;

/// Validate a style, returning all errors found.
pub fn validate_style(style: &TileStyle) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (value, path) in [(style.width, "width"), (style.height, "height")] {
        if value == 0 || value > MAX_CANVAS_DIMENSION {
            errors.push(ValidationError::with_path(
                ErrorCode::InvalidCanvasSize,
                format!(
                    "canvas dimension must be in 1..={}, got {}",
                    MAX_CANVAS_DIMENSION, value
                ),
                path,
            ));
        }
    }
    // Geometry checks below assume a usable canvas.
    if !errors.is_empty() {
        return Err(errors);
    }

    // Style fields are arbitrary u32 values from JSON; widened so the
    // arithmetic below cannot overflow.
    let short = u64::from(style.width.min(style.height));
    let long = u64::from(style.width.max(style.height));
    let margin = u64::from(style.margin);

    if 2 * margin >= short {
        errors.push(ValidationError::with_path(
            ErrorCode::MarginTooLarge,
            format!(
                "margin {} leaves no face on a {}px side",
                style.margin, short
            ),
            "margin",
        ));
        return Err(errors);
    }

    let face_short = short - 2 * margin;
    if u64::from(style.corner_radius) * 2 > face_short {
        errors.push(ValidationError::with_path(
            ErrorCode::CornerRadiusTooLarge,
            format!(
                "corner radius {} exceeds half the face's short side ({})",
                style.corner_radius,
                face_short / 2
            ),
            "corner_radius",
        ));
    }

    if style.dot_radius == 0 {
        errors.push(ValidationError::with_path(
            ErrorCode::InvalidDotRadius,
            "dot radius must be non-zero",
            "dot_radius",
        ));
    }

    // Long-axis padding is measured inside one half, short-axis padding
    // across the whole short side.
    let inner = margin + u64::from(style.dot_radius);
    let [pad_long, pad_short] = style.pip_padding.map(u64::from);
    if pad_long < inner || pad_long * 2 > long / 2 {
        errors.push(ValidationError::with_path(
            ErrorCode::PipOutOfBounds,
            format!(
                "long-axis pip padding {} must be in {}..={}",
                pad_long,
                inner,
                long / 4
            ),
            "pip_padding[0]",
        ));
    }
    if pad_short < inner || pad_short * 2 > short {
        errors.push(ValidationError::with_path(
            ErrorCode::PipOutOfBounds,
            format!(
                "short-axis pip padding {} must be in {}..={}",
                pad_short,
                inner,
                short / 2
            ),
            "pip_padding[1]",
        ));
    }

    if u64::from(style.divider_margin) * 2 >= short {
        errors.push(ValidationError::with_path(
            ErrorCode::DividerMarginTooLarge,
            format!(
                "divider margin {} must be less than {}",
                style.divider_margin,
                short / 2
            ),
            "divider_margin",
        ));
    }

    for (value, path) in [
        (style.border_thickness, "border_thickness"),
        (style.split_line_thickness, "split_line_thickness"),
    ] {
        if u64::from(value) * 2 > face_short {
            errors.push(ValidationError::with_path(
                ErrorCode::LineTooThick,
                format!(
                    "line thickness {} exceeds half the face's short side ({})",
                    value,
                    face_short / 2
                ),
                path,
            ));
        }
    }

    let blur = style.drop_shadow.blur;
    if !blur.is_finite() || !(0.0..=MAX_SHADOW_BLUR).contains(&blur) {
        errors.push(ValidationError::with_path(
            ErrorCode::InvalidShadowBlur,
            format!(
                "drop shadow blur must be in 0..={}, got {}",
                MAX_SHADOW_BLUR, blur
            ),
            "drop_shadow.blur",
        ));
    }

    for (axis, offset) in style.drop_shadow.offset.into_iter().enumerate() {
        if offset.unsigned_abs() > MAX_CANVAS_DIMENSION {
            errors.push(ValidationError::with_path(
                ErrorCode::InvalidShadowOffset,
                format!(
                    "drop shadow offset {} must be within +/-{}",
                    offset, MAX_CANVAS_DIMENSION
                ),
                format!("drop_shadow.offset[{}]", axis),
            ));
        }
    }

    if style.dpi == 0 {
        errors.push(ValidationError::with_path(
            ErrorCode::InvalidDpi,
            "dpi must be non-zero",
            "dpi",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
