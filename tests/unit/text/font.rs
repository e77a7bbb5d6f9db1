use super::*;

#[test]
fn empty_candidate_list_uses_builtin_face() {
    let font = resolve_font(&[], 48.0, 2);
    assert_eq!(font.source(), FontSource::Builtin);
    assert!(matches!(font, OverlayFont::Bitmap(f) if f.scale() == 2));
}

#[test]
fn unreadable_and_corrupt_candidates_fall_through_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let corrupt = dir.path().join("Corrupt.ttf");
    std::fs::write(&corrupt, b"definitely not an sfnt table directory").unwrap();
    let missing = dir.path().join("Missing.otf");

    let font = resolve_font(&[missing, corrupt], 48.0, 3);
    assert_eq!(font.source(), FontSource::Builtin);
}

#[test]
fn outline_load_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("Empty.ttf");
    std::fs::write(&empty, b"").unwrap();

    assert!(OutlineFace::load(&empty, 48.0).is_err());
    assert!(OutlineFace::load(&dir.path().join("nope.ttf"), 48.0).is_err());
    assert!(matches!(
        OutlineFace::load(&empty, 0.0),
        Err(PlacardError::Validation(_))
    ));
}

#[test]
fn bitmap_measure_uses_fixed_metrics() {
    let mut font = OverlayFont::Bitmap(BitmapFace::new(2));
    let extent = font.measure("hello");
    assert_eq!(extent.width, 80.0);
    assert_eq!(extent.height, 20.0);
}

#[test]
fn brush_is_opaque_rgb() {
    let brush = TextBrushRgba8::from(Rgb8::new(1, 2, 3));
    assert_eq!(
        brush,
        TextBrushRgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 255
        }
    );
}

fn dejavu_sans() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf")
}

#[test]
fn first_loadable_candidate_wins_over_broken_ones() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("Broken.ttf");
    std::fs::write(&broken, b"nope").unwrap();

    let font = resolve_font(&[broken, dejavu_sans(), dir.path().join("Later.otf")], 48.0, 3);
    assert_eq!(font.source(), FontSource::File(dejavu_sans()));
    let OverlayFont::Outline(face) = font else {
        panic!("expected outline face");
    };
    assert_eq!(face.family(), "DejaVu Sans");
    assert_eq!(face.path(), dejavu_sans());
}

#[test]
fn outline_measure_fits_budget_and_grows_with_text() {
    let mut face = OutlineFace::load(&dejavu_sans(), 48.0).unwrap();
    let short = face.measure("Inscreva-se já!");
    let long = face.measure("Inscreva-se já! Inscreva-se já!");

    assert!(short.width > 200.0 && short.width <= 819.0, "width {}", short.width);
    assert!(long.width > short.width * 1.8, "{} vs {}", long.width, short.width);
    assert!(short.height >= 48.0 && short.height < 80.0, "height {}", short.height);
    assert_eq!(face.measure("Hi").height, short.height);
}

#[test]
fn outline_measure_scales_with_size() {
    let mut small = OutlineFace::load(&dejavu_sans(), 24.0).unwrap();
    let mut large = OutlineFace::load(&dejavu_sans(), 48.0).unwrap();
    let a = small.measure("campaign").width;
    let b = large.measure("campaign").width;
    assert!((b / a - 2.0).abs() < 0.05, "{a} -> {b}");
}
