use super::*;

#[test]
fn department_title_matches_title_case_rules() {
    assert_eq!(department_title("education"), "Education");
    assert_eq!(department_title("public_works"), "Public Works");
    assert_eq!(department_title("HEALTH_and_sports"), "Health And Sports");
    assert_eq!(department_title("ação_social"), "Ação Social");
    assert_eq!(department_title("area51x"), "Area51X");
}

#[test]
fn generic_phrases_when_references_are_empty() {
    let prompt = build_prompt(
        "education",
        "banner",
        "enrollment campaign",
        &IndexMap::new(),
        &[],
        0,
    );
    assert_eq!(
        prompt,
        "Create a banner for the Education Department with the theme: enrollment campaign. \
         Use the colors institutional colors and typography similar to institutional typography. \
         use a harmonious and modern layout. \
         Include visual elements that evoke the department's activities and keep the artwork original."
    );
}

#[test]
fn lists_colors_fonts_and_layout_count_in_order() {
    let mut colors = IndexMap::new();
    colors.insert("primary".to_string(), "#1A1A1A".to_string());
    colors.insert("accent".to_string(), "FFCC00".to_string());
    let fonts = vec![
        PathBuf::from("refs/fonts/Montserrat-Bold.ttf"),
        PathBuf::from("refs/fonts/OpenSans.otf"),
    ];

    let prompt = build_prompt("public_works", "poster", "road repairs", &colors, &fonts, 3);
    assert!(prompt.starts_with("Create a poster for the Public Works Department"));
    assert!(prompt.contains("theme: road repairs."));
    assert!(prompt.contains("Use the colors primary #1A1A1A, accent FFCC00 and"));
    assert!(prompt.contains("typography similar to Montserrat-Bold, OpenSans."));
    assert!(prompt.contains("supplied layout images (count: 3)"));
    assert!(!prompt.contains("harmonious"));
}

#[test]
fn theme_is_interpolated_verbatim() {
    let prompt = build_prompt("x", "banner", "campanha de matrícula", &IndexMap::new(), &[], 0);
    assert!(prompt.contains("with the theme: campanha de matrícula."));
}
