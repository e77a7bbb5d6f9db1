use super::*;

fn colors(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_colors_give_neutral_gray() {
    let img = generate_base(&IndexMap::new(), 4, 3);
    assert_eq!(img.dimensions(), (4, 3));
    assert!(img.pixels().all(|p| p.0 == [200, 200, 200]));
}

#[test]
fn first_color_in_mapping_order_fills_canvas() {
    let img = generate_base(&colors(&[("primary", "#1A1A1A"), ("accent", "FF0000")]), 5, 5);
    assert!(img.pixels().all(|p| p.0 == [26, 26, 26]));
}

#[test]
fn undecodable_first_color_falls_back_to_gray() {
    for code in ["blue", "#12345", "1234567", ""] {
        let c = colors(&[("primary", code), ("accent", "FF0000")]);
        assert_eq!(base_color(&c), NEUTRAL_GRAY, "{code:?}");
    }
}
