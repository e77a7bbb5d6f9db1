use std::path::PathBuf;

use indexmap::IndexMap;

const GENERIC_COLORS: &str = "institutional colors";
const GENERIC_FONTS: &str = "institutional typography";
const GENERIC_LAYOUT: &str = "use a harmonious and modern layout";

/// Compose the natural-language description handed to the image generator.
///
/// Pure and deterministic: colors are listed in mapping order, fonts by file stem in list order.
pub fn build_prompt(
    department: &str,
    material: &str,
    theme: &str,
    colors: &IndexMap<String, String>,
    fonts: &[PathBuf],
    layout_count: usize,
) -> String {
    let colors_desc = if colors.is_empty() {
        GENERIC_COLORS.to_string()
    } else {
        colors
            .iter()
            .map(|(name, code)| format!("{name} {code}"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let fonts_desc = if fonts.is_empty() {
        GENERIC_FONTS.to_string()
    } else {
        fonts
            .iter()
            .map(|p| {
                p.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    let layout_desc = if layout_count > 0 {
        format!(
            "use a composition similar to the supplied layout images (count: {layout_count}), \
             with a balanced arrangement of images and text"
        )
    } else {
        GENERIC_LAYOUT.to_string()
    };

    format!(
        "Create a {material} for the {dept} Department with the theme: {theme}. \
         Use the colors {colors_desc} and typography similar to {fonts_desc}. \
         {layout_desc}. \
         Include visual elements that evoke the department's activities and keep the artwork original.",
        dept = department_title(department),
    )
}

/// `"public_works"` -> `"Public Works"`.
///
/// A letter is uppercased when it follows a non-letter and lowercased otherwise.
pub fn department_title(department: &str) -> String {
    let mut out = String::with_capacity(department.len());
    let mut prev_alpha = false;
    for ch in department.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/prompt/compose.rs"]
mod tests;
