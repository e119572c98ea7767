//! End-to-end tests for tile rendering: pipeline output, PNG metadata, and
//! files on disk.

use dominoes_backend_tile::generate::{
    generate_tile, png_config_for, render_back, render_face, save_tile_result, GenerateError,
};
use dominoes_backend_tile::TextureBuffer;
use dominoes_spec::{
    BackDesign, Orientation, TileKind, TileStyle, MAX_CANVAS_DIMENSION, MAX_SHADOW_BLUR,
};

fn decode(data: &[u8]) -> (png::OutputInfo, Vec<u8>, Option<png::PixelDimensions>) {
    let decoder = png::Decoder::new(std::io::Cursor::new(data));
    let mut reader = decoder.read_info().unwrap();
    let dims = reader.info().pixel_dims;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    (info, buf, dims)
}

fn count_dark_pixels(image: &TextureBuffer) -> usize {
    image
        .data
        .iter()
        .filter(|c| {
            let [r, g, b, a] = c.to_rgba8();
            a == 255 && r == 30 && g == 30 && b == 30
        })
        .count()
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_face_is_deterministic() {
    let style = TileStyle::default();
    let kind = TileKind::face(2, 4, Orientation::Horizontal).unwrap();
    let config = png_config_for(&style);

    let a = generate_tile(&kind, &style, &config).unwrap();
    let b = generate_tile(&kind, &style, &config).unwrap();

    assert_eq!(a.png_data, b.png_data);
    assert_eq!(a.hash, b.hash);
    assert_eq!(a.filename, "domino_2_4.png");
}

#[test]
fn test_more_pips_means_more_ink() {
    let style = TileStyle::default();
    let blank = render_face(0, 0, Orientation::Horizontal, &style).unwrap();
    let one = render_face(0, 1, Orientation::Horizontal, &style).unwrap();
    let six = render_face(6, 6, Orientation::Horizontal, &style).unwrap();

    // Only the divider carries the dot colour on a blank face.
    let divider_only = count_dark_pixels(&blank);
    assert!(divider_only > 0);
    assert!(count_dark_pixels(&one) > divider_only);
    assert!(count_dark_pixels(&six) > count_dark_pixels(&one));
}

#[test]
fn test_orientations_share_size_transposed() {
    let style = TileStyle::default();
    let h = render_face(1, 2, Orientation::Horizontal, &style).unwrap();
    let v = render_face(1, 2, Orientation::Vertical, &style).unwrap();

    assert!(h.width > h.height);
    assert!(v.height > v.width);
    assert!(h.width <= 800 && h.height <= 400);
    assert!(v.width <= 400 && v.height <= 800);
}

#[test]
fn test_swapped_values_differ() {
    let style = TileStyle::default();
    let config = png_config_for(&style);
    let a = generate_tile(
        &TileKind::face(1, 5, Orientation::Horizontal).unwrap(),
        &style,
        &config,
    )
    .unwrap();
    let b = generate_tile(
        &TileKind::face(5, 1, Orientation::Horizontal).unwrap(),
        &style,
        &config,
    )
    .unwrap();

    assert_ne!(a.hash, b.hash);
}

#[test]
fn test_backs_match_without_overrides() {
    let style = TileStyle::default();
    let player = render_back(BackDesign::Player, &style).unwrap();
    let ai = render_back(BackDesign::Ai, &style).unwrap();

    assert_eq!(player.data, ai.data);
    assert_eq!(count_dark_pixels(&player), 0);
}

#[test]
fn test_custom_drop_shadow_renders_within_canvas() {
    let mut style = TileStyle::default();
    let plain = render_face(2, 5, Orientation::Horizontal, &style).unwrap();

    style.drop_shadow.offset = [6, -4];
    style.drop_shadow.blur = 4.0;
    let shifted = render_face(2, 5, Orientation::Horizontal, &style).unwrap();

    assert!(shifted.width <= 800 && shifted.height <= 400);
    assert!(shifted.width > 720 && shifted.height > 320);
    assert_ne!(shifted.data, plain.data);
}

#[test]
fn test_drop_shadow_at_limits_renders() {
    let mut style = TileStyle::default();
    let limit = MAX_CANVAS_DIMENSION as i32;
    style.drop_shadow.offset = [limit, -limit];
    style.drop_shadow.blur = MAX_SHADOW_BLUR;

    // The shadow lands entirely off the canvas; only the face remains.
    let image = render_back(BackDesign::Player, &style).unwrap();
    assert!(image.width <= 800 && image.height <= 400);
    assert_eq!(image.get(image.width / 2, image.height / 2).alpha8(), 255);
}

#[test]
fn test_out_of_range_drop_shadow_is_an_error() {
    let mut huge_blur = TileStyle::default();
    huge_blur.drop_shadow.blur = 100_000.0;
    let mut huge_offset = TileStyle::default();
    huge_offset.drop_shadow.offset = [i32::MAX, 0];

    for (style, code) in [(huge_blur, "E007"), (huge_offset, "E009")] {
        match render_back(BackDesign::Player, &style) {
            Err(GenerateError::InvalidStyle(msg)) => assert!(msg.contains(code), "{msg}"),
            other => panic!("expected invalid style, got {:?}", other.map(|b| b.width)),
        }
    }
}

// ============================================================================
// PNG output
// ============================================================================

#[test]
fn test_png_carries_dpi_and_dimensions() {
    let style = TileStyle::default();
    let result = generate_tile(
        &TileKind::face(3, 3, Orientation::Vertical).unwrap(),
        &style,
        &png_config_for(&style),
    )
    .unwrap();

    let (info, pixels, dims) = decode(&result.png_data);
    assert_eq!((info.width, info.height), (result.width, result.height));
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(pixels.len(), (result.width * result.height * 4) as usize);

    let dims = dims.expect("pHYs chunk");
    assert_eq!(dims.xppu, 11811);
    assert_eq!(dims.unit, png::Unit::Meter);
}

#[test]
fn test_corners_stay_transparent() {
    let style = TileStyle::default();
    let result = generate_tile(&TileKind::back(BackDesign::Player), &style, &png_config_for(&style))
        .unwrap();
    let (info, pixels, _) = decode(&result.png_data);

    // The rounded face and soft shadow never reach the very corner.
    assert_eq!(pixels[3], 0);
    let last = (info.width * info.height * 4 - 1) as usize;
    assert_eq!(pixels[last], 0);
}

#[test]
fn test_save_tile_result_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let style = TileStyle::default();
    let result = generate_tile(
        &TileKind::face(0, 6, Orientation::Vertical).unwrap(),
        &style,
        &png_config_for(&style),
    )
    .unwrap();

    let path = save_tile_result(&result, dir.path()).unwrap();
    assert_eq!(path, dir.path().join("domino_0_6_v.png"));
    assert_eq!(std::fs::read(&path).unwrap(), result.png_data);
}
