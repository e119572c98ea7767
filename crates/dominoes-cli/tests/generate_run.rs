//! End-to-end tests for a generation run through the CLI library.

use dominoes_cli::commands::generate::{generate_set, GenerateOptions};
use dominoes_cli::commands::list::list_tiles;
use dominoes_cli::input::load_style;
use dominoes_spec::{hash_bytes, Manifest, TileSelection, TileSetMode, MANIFEST_FILENAME};
use std::fs;

#[test]
fn test_manifest_matches_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let options = GenerateOptions {
        out_dir: dir.path().join("tiles"),
        selection: TileSelection::Backs,
        ..GenerateOptions::default()
    };

    let output = generate_set(&options, |_| {});
    assert!(output.success, "errors: {:?}", output.errors);

    let manifest_json = fs::read_to_string(options.out_dir.join(MANIFEST_FILENAME)).unwrap();
    let manifest = Manifest::from_json_str(&manifest_json).unwrap();

    let planned = list_tiles(TileSetMode::Unique, TileSelection::Backs);
    assert_eq!(manifest.tiles.len(), planned.count);

    for (entry, listed) in manifest.tiles.iter().zip(&planned.tiles) {
        assert_eq!(entry.filename, listed.filename);
        let bytes = fs::read(options.out_dir.join(&entry.filename)).unwrap();
        assert_eq!(hash_bytes(&bytes), entry.hash);

        let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, entry.width);
        assert_eq!(reader.info().height, entry.height);
        assert_eq!(reader.info().pixel_dims.unwrap().xppu, 11811);
    }
}

#[test]
fn test_rerun_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    for dir in [&first, &second] {
        let options = GenerateOptions {
            out_dir: dir.path().to_path_buf(),
            selection: TileSelection::Backs,
            ..GenerateOptions::default()
        };
        assert!(generate_set(&options, |_| {}).success);
    }

    for name in ["domino_back.png", "domino_back_ai.png", MANIFEST_FILENAME] {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap(),
            "{} differs between runs",
            name
        );
    }
}

#[test]
fn test_custom_back_colours_change_only_that_back() {
    let dir = tempfile::tempdir().unwrap();
    let style_path = dir.path().join("style.json");
    fs::write(
        &style_path,
        r#"{ "backs": { "ai": { "light": [90, 120, 200, 255], "dark": [40, 60, 140, 255] } } }"#,
    )
    .unwrap();
    assert!(load_style(Some(&style_path)).is_ok());

    let custom = dir.path().join("custom");
    let plain = dir.path().join("plain");
    for (out_dir, style_path) in [(&custom, Some(style_path.clone())), (&plain, None)] {
        let options = GenerateOptions {
            out_dir: out_dir.clone(),
            style_path,
            selection: TileSelection::Backs,
            write_manifest: false,
            ..GenerateOptions::default()
        };
        assert!(generate_set(&options, |_| {}).success);
    }

    assert_eq!(
        fs::read(custom.join("domino_back.png")).unwrap(),
        fs::read(plain.join("domino_back.png")).unwrap()
    );
    assert_ne!(
        fs::read(custom.join("domino_back_ai.png")).unwrap(),
        fs::read(plain.join("domino_back_ai.png")).unwrap()
    );
}
