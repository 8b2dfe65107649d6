//! End-to-end checks on the generated placeholder files: pixel formats,
//! catalog geometry, and byte-level determinism of the PNG encode.

use image::ColorType;
use placeholder_icons::{load_font, placeholder_catalog, render};

#[test]
fn written_files_decode_with_expected_formats() {
    let dir = tempfile::tempdir().unwrap();
    let font = load_font().unwrap();
    for spec in placeholder_catalog() {
        let path = dir.path().join(spec.file_name);
        render(&spec, &font).unwrap().save(&path).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!(
            (decoded.width(), decoded.height()),
            (spec.width, spec.height),
            "{}",
            spec.file_name
        );
        let expected = if spec.file_name == "notification-icon.png" {
            ColorType::Rgba8
        } else {
            ColorType::Rgb8
        };
        assert_eq!(decoded.color(), expected, "{}", spec.file_name);
    }
}

#[test]
fn generation_is_byte_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let font = load_font().unwrap();
    for spec in placeholder_catalog() {
        let first = dir.path().join(format!("a-{}", spec.file_name));
        let second = dir.path().join(format!("b-{}", spec.file_name));
        render(&spec, &font).unwrap().save(&first).unwrap();
        render(&spec, &font).unwrap().save(&second).unwrap();
        let a = std::fs::read(&first).unwrap();
        let b = std::fs::read(&second).unwrap();
        assert!(!a.is_empty());
        assert_eq!(a, b, "{} not deterministic", spec.file_name);
    }
}

#[test]
fn app_icon_scenario_pixels() {
    let font = load_font().unwrap();
    let spec = placeholder_catalog().into_iter().next().unwrap();
    let img = render(&spec, &font).unwrap().to_rgb8();
    // Background corner, circle interior left of the label.
    assert_eq!(img.get_pixel(50, 50).0, [37, 99, 235]);
    assert_eq!(img.get_pixel(230, 512).0, [255, 255, 255]);
}
