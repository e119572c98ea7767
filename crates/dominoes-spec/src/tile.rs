//! Tile kinds and tile-set enumeration.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Highest pip value in a double-six set.
pub const MAX_PIP_VALUE: u8 = 6;

/// Tile orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Halves side by side; the first value is on the left.
    Horizontal,
    /// Halves stacked; the first value is on top.
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Back-of-tile design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackDesign {
    /// Back shown for the local player's hand.
    Player,
    /// Back shown for the computer opponent's hand.
    Ai,
}

impl BackDesign {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackDesign::Player => "player",
            BackDesign::Ai => "ai",
        }
    }
}

/// A single tile image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TileKind {
    /// A face showing two pip values.
    Face {
        first: u8,
        second: u8,
        orientation: Orientation,
    },
    /// A tile back.
    Back { design: BackDesign },
}

impl TileKind {
    /// Create a face tile, rejecting pip values above six.
    pub fn face(first: u8, second: u8, orientation: Orientation) -> Result<Self, SpecError> {
        for value in [first, second] {
            if value > MAX_PIP_VALUE {
                return Err(SpecError::PipValueOutOfRange(value));
            }
        }
        Ok(TileKind::Face {
            first,
            second,
            orientation,
        })
    }

    /// Create a back tile.
    pub fn back(design: BackDesign) -> Self {
        TileKind::Back { design }
    }

    /// Output filename for this tile.
    pub fn filename(&self) -> String {
        match self {
            TileKind::Face {
                first,
                second,
                orientation: Orientation::Horizontal,
            } => format!("domino_{}_{}.png", first, second),
            TileKind::Face {
                first,
                second,
                orientation: Orientation::Vertical,
            } => format!("domino_{}_{}_v.png", first, second),
            TileKind::Back {
                design: BackDesign::Player,
            } => "domino_back.png".to_string(),
            TileKind::Back {
                design: BackDesign::Ai,
            } => "domino_back_ai.png".to_string(),
        }
    }

    /// Orientation of the rendered image. Backs are always horizontal.
    pub fn orientation(&self) -> Orientation {
        match self {
            TileKind::Face { orientation, .. } => *orientation,
            TileKind::Back { .. } => Orientation::Horizontal,
        }
    }

    pub fn is_face(&self) -> bool {
        matches!(self, TileKind::Face { .. })
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileKind::Face {
                first,
                second,
                orientation,
            } => write!(f, "{}|{} ({})", first, second, orientation.as_str()),
            TileKind::Back { design } => write!(f, "back ({})", design.as_str()),
        }
    }
}

/// Which value pairs make up the face set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileSetMode {
    /// The 28 distinct tiles of a double-six set (`first <= second`).
    #[default]
    Unique,
    /// All 49 ordered pairs, so `domino_5_2.png` exists next to `domino_2_5.png`.
    Ordered,
}

/// Which part of the set to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileSelection {
    Faces,
    Backs,
    #[default]
    All,
}

/// Enumerate the tiles of a set.
///
/// Faces come first, in row-major value order with each pair's horizontal
/// image before its vertical one. The two backs follow.
pub fn tile_set(mode: TileSetMode, selection: TileSelection) -> Vec<TileKind> {
    let mut tiles = Vec::new();

    if selection != TileSelection::Backs {
        for first in 0..=MAX_PIP_VALUE {
            for second in 0..=MAX_PIP_VALUE {
                if mode == TileSetMode::Unique && second < first {
                    continue;
                }
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    tiles.push(TileKind::Face {
                        first,
                        second,
                        orientation,
                    });
                }
            }
        }
    }

    if selection != TileSelection::Faces {
        tiles.push(TileKind::back(BackDesign::Player));
        tiles.push(TileKind::back(BackDesign::Ai));
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_unique_set_counts() {
        let tiles = tile_set(TileSetMode::Unique, TileSelection::All);
        assert_eq!(tiles.len(), 58);
        assert_eq!(tiles.iter().filter(|t| t.is_face()).count(), 56);
    }

    #[test]
    fn test_unique_set_has_28_pairs() {
        let pairs: HashSet<(u8, u8)> = tile_set(TileSetMode::Unique, TileSelection::Faces)
            .into_iter()
            .filter_map(|t| match t {
                TileKind::Face { first, second, .. } => Some((first, second)),
                TileKind::Back { .. } => None,
            })
            .collect();
        assert_eq!(pairs.len(), 28);
        assert!(pairs.iter().all(|(a, b)| a <= b));
    }

    #[test]
    fn test_ordered_set_counts() {
        let tiles = tile_set(TileSetMode::Ordered, TileSelection::Faces);
        assert_eq!(tiles.len(), 98);
    }

    #[test]
    fn test_backs_only() {
        let tiles = tile_set(TileSetMode::Unique, TileSelection::Backs);
        assert_eq!(
            tiles,
            vec![
                TileKind::back(BackDesign::Player),
                TileKind::back(BackDesign::Ai)
            ]
        );
    }

    #[test]
    fn test_order_horizontal_then_vertical() {
        let tiles = tile_set(TileSetMode::Unique, TileSelection::All);
        let names: Vec<String> = tiles.iter().take(4).map(|t| t.filename()).collect();
        assert_eq!(
            names,
            vec![
                "domino_0_0.png",
                "domino_0_0_v.png",
                "domino_0_1.png",
                "domino_0_1_v.png"
            ]
        );
        assert_eq!(tiles[56].filename(), "domino_back.png");
        assert_eq!(tiles[57].filename(), "domino_back_ai.png");
    }

    #[test]
    fn test_filenames_unique() {
        let tiles = tile_set(TileSetMode::Ordered, TileSelection::All);
        let names: HashSet<String> = tiles.iter().map(|t| t.filename()).collect();
        assert_eq!(names.len(), tiles.len());
    }

    #[test]
    fn test_face_rejects_out_of_range() {
        assert!(TileKind::face(6, 6, Orientation::Vertical).is_ok());
        let err = TileKind::face(2, 7, Orientation::Horizontal).unwrap_err();
        assert!(matches!(err, SpecError::PipValueOutOfRange(7)));
    }

    #[test]
    fn test_back_orientation_is_horizontal() {
        assert_eq!(
            TileKind::back(BackDesign::Ai).orientation(),
            Orientation::Horizontal
        );
    }

    #[test]
    fn test_kind_serializes_tagged() {
        let json = serde_json::to_value(TileKind::back(BackDesign::Ai)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "back", "design": "ai"}));
    }
}
