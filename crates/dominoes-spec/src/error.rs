//! Error types for style validation and tile enumeration.

use thiserror::Error;

/// Error codes for style validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Canvas dimension is zero or too large
    InvalidCanvasSize,
    /// E002: Margin leaves no room for the face
    MarginTooLarge,
    /// E003: Corner radius exceeds half the face's short side
    CornerRadiusTooLarge,
    /// E004: Pip radius is zero
    InvalidDotRadius,
    /// E005: Pip layout falls outside the face
    PipOutOfBounds,
    /// E006: Divider margin swallows the divider
    DividerMarginTooLarge,
    /// E007: Drop shadow blur is negative, too large, or not finite
    InvalidShadowBlur,
    /// E008: DPI is zero
    InvalidDpi,
    /// E009: Drop shadow offset exceeds the largest canvas
    InvalidShadowOffset,
    /// E010: Border or divider line thicker than half the face
    LineTooThick,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidCanvasSize => "E001",
            ErrorCode::MarginTooLarge => "E002",
            ErrorCode::CornerRadiusTooLarge => "E003",
            ErrorCode::InvalidDotRadius => "E004",
            ErrorCode::PipOutOfBounds => "E005",
            ErrorCode::DividerMarginTooLarge => "E006",
            ErrorCode::InvalidShadowBlur => "E007",
            ErrorCode::InvalidDpi => "E008",
            ErrorCode::InvalidShadowOffset => "E009",
            ErrorCode::LineTooThick => "E010",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "pip_padding\[0\]").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Top-level error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Pip value outside the double-six range.
    #[error("pip value {0} is out of range (0-6)")]
    PipValueOutOfRange(u8),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so the CLI can report a
/// stable code and category without depending on backend internals.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting, like "TILE_001".
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
