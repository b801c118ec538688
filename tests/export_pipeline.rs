//! Export pipeline scenarios: filename policy, oversampling, and failure
//! behavior.

use noteflow::application::export::{export_card, export_filename};
use noteflow::domain::{CardContent, Styling};
use noteflow::render::{compose, CARD_WIDTH};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn exports_one_millisecond_apart_have_distinct_names() {
    let dir = tempfile::tempdir().unwrap();
    let svg = compose(&CardContent::seed(), &Styling::default()).to_svg();

    let first = export_card(&svg, dir.path(), 1_700_000_000_000).unwrap();
    let second = export_card(&svg, dir.path(), 1_700_000_000_001).unwrap();

    assert_ne!(first, second);
    assert!(first.exists() && second.exists());
    assert_eq!(
        first.file_name().unwrap().to_string_lossy(),
        "noteflow-1700000000000.png"
    );
}

#[test]
fn export_captures_container_box_at_three_x() {
    let dir = tempfile::tempdir().unwrap();
    let card = CardContent::seed();
    let styling = Styling::default();
    let surface = compose(&card, &styling);

    let path = export_card(&surface.to_svg(), dir.path(), 1).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], &PNG_MAGIC);

    let pixmap = tiny_skia::Pixmap::decode_png(&bytes).unwrap();
    assert_eq!(pixmap.width(), (CARD_WIDTH * 3.0).ceil() as u32);
    assert_eq!(pixmap.height(), (surface.height * 3.0).ceil() as u32);
}

#[test]
fn export_never_mutates_the_records() {
    let dir = tempfile::tempdir().unwrap();
    let card = CardContent::seed();
    let styling = Styling::default();
    let card_before = card.clone();
    let styling_before = styling;

    let svg = compose(&card, &styling).to_svg();
    export_card(&svg, dir.path(), 2).unwrap();

    assert_eq!(card, card_before);
    assert_eq!(styling, styling_before);
}

#[test]
fn failed_rasterization_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();

    let result = export_card("<definitely not svg", dir.path(), 3);
    assert!(result.is_err());

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(entries.is_empty(), "no partial file may be produced");
}

#[test]
fn filename_embeds_capture_timestamp() {
    assert_eq!(export_filename(42), "noteflow-42.png");
    assert_ne!(export_filename(42), export_filename(43));
}
