use indexmap::IndexMap;

use crate::{
    foundation::core::{NEUTRAL_GRAY, Rgb8, hex_to_rgb_or_default},
    references::resolver::first_color,
};

/// Background color for the base canvas: the first reference color, or neutral gray.
pub fn base_color(colors: &IndexMap<String, String>) -> Rgb8 {
    first_color(colors)
        .map(|code| hex_to_rgb_or_default(code, NEUTRAL_GRAY))
        .unwrap_or(NEUTRAL_GRAY)
}

/// Solid-fill placeholder standing in for generated artwork.
pub fn generate_base(colors: &IndexMap<String, String>, width: u32, height: u32) -> image::RgbImage {
    let color = base_color(colors);
    tracing::debug!(width, height, color = %color.to_hex(), "generating base canvas");
    image::RgbImage::from_pixel(width, height, color.into())
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
