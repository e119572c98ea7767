//! BLAKE3 hashing for generated files and styles.

use crate::error::SpecError;
use crate::style::TileStyle;

/// Hex-encoded BLAKE3 hash of raw bytes.
pub fn hash_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Hash of a style's compact JSON form.
///
/// Field order follows the struct declaration, so two equal styles always
/// hash the same.
pub fn style_hash(style: &TileStyle) -> Result<String, SpecError> {
    let json = serde_json::to_vec(style)?;
    Ok(hash_bytes(&json))
}
