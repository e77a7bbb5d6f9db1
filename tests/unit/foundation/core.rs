use super::*;

#[test]
fn hex_round_trips_case_insensitively() {
    for code in ["1A1A1A", "ff3366", "#00Ff7f", "000000", "#FFFFFF", "c0ffee"] {
        let rgb = Rgb8::from_hex(code).unwrap();
        let digits = code.trim_start_matches('#');
        assert_eq!(rgb.to_hex(), digits.to_ascii_uppercase());
    }
}

#[test]
fn hex_decodes_channels_in_order() {
    assert_eq!(Rgb8::from_hex("#102030"), Some(Rgb8::new(0x10, 0x20, 0x30)));
}

#[test]
fn malformed_hex_is_rejected() {
    for code in ["", "#", "12345", "1234567", "zz0000", "12 456", "#12345g", "+f+f+f", "é00000"] {
        assert_eq!(Rgb8::from_hex(code), None, "{code:?}");
    }
}

#[test]
fn malformed_hex_falls_back_to_default() {
    assert_eq!(hex_to_rgb_or_default("nothex", NEUTRAL_GRAY), NEUTRAL_GRAY);
    assert_eq!(hex_to_rgb_or_default("abc", Rgb8::WHITE), Rgb8::WHITE);
    assert_eq!(
        hex_to_rgb_or_default("#1a1a1a", NEUTRAL_GRAY),
        Rgb8::new(26, 26, 26)
    );
}

#[test]
fn brightness_uses_perceptual_weights() {
    assert_eq!(Rgb8::BLACK.brightness(), 0.0);
    assert!((Rgb8::WHITE.brightness() - 255.0).abs() < 1e-9);
    assert!((Rgb8::new(186, 186, 186).brightness() - 186.0).abs() < 1e-9);
    assert!((Rgb8::new(255, 0, 0).brightness() - 76.245).abs() < 1e-9);
}

#[test]
fn converts_into_image_pixel() {
    let px: image::Rgb<u8> = Rgb8::new(1, 2, 3).into();
    assert_eq!(px.0, [1, 2, 3]);
}
