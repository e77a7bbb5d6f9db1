use std::path::PathBuf;

use indexmap::IndexMap;

use crate::{
    foundation::core::Rgb8,
    foundation::error::{PlacardError, PlacardResult},
    foundation::settings::PlacardSettings,
    references::resolver::first_color,
    render::composite::over_rgb_in_place,
    text::font::{FontSource, OverlayFont, resolve_font},
    text::wrap::wrap_greedy,
};

/// Lines, metrics and placement computed for one overlay call.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<String>,
    pub line_widths: Vec<f32>,
    pub line_heights: Vec<f32>,
    pub color: Rgb8,
    /// Top of the first line; the block's bottom sits `bottom_margin` above the surface bottom.
    pub start_y: f32,
    pub font: FontSource,
}

impl TextLayout {
    pub fn block_height(&self) -> f32 {
        self.line_heights.iter().sum()
    }

    /// Horizontally centered x of line `i` on a surface `surface_width` pixels wide.
    pub fn line_x(&self, i: usize, surface_width: u32) -> f32 {
        (surface_width as f32 - self.line_widths[i]) / 2.0
    }

    /// Top y of line `i`.
    pub fn line_y(&self, i: usize) -> f32 {
        self.start_y + self.line_heights[..i].iter().sum::<f32>()
    }
}

/// Black on light backgrounds, white otherwise.
///
/// Brightness strictly above `threshold` picks black. Missing or undecodable colors pick white.
/// Decodes with [`Rgb8::from_hex`] rather than `hex_to_rgb_or_default`: a bad code means white
/// text, not the brightness of the canvas fallback gray.
pub fn select_text_color(colors: &IndexMap<String, String>, threshold: f64) -> Rgb8 {
    match first_color(colors).and_then(Rgb8::from_hex) {
        Some(background) if background.brightness() > threshold => Rgb8::BLACK,
        _ => Rgb8::WHITE,
    }
}

/// Wrap and place `message` for a `width`x`height` surface using `font`.
pub fn layout_text(
    font: &mut OverlayFont,
    message: &str,
    width: u32,
    height: u32,
    color: Rgb8,
    settings: &PlacardSettings,
) -> TextLayout {
    let budget = settings.line_width_budget(width);
    let lines = wrap_greedy(message, budget, |s| font.measure(s).width);

    let (line_widths, line_heights): (Vec<f32>, Vec<f32>) = lines
        .iter()
        .map(|line| {
            let extent = font.measure(line);
            (extent.width, extent.height)
        })
        .unzip();

    let block: f32 = line_heights.iter().sum();
    let start_y = height as f32 - block - settings.bottom_margin as f32;
    tracing::debug!(lines = lines.len(), budget, start_y, "laid out overlay text");

    TextLayout {
        lines,
        line_widths,
        line_heights,
        color,
        start_y,
        font: font.source(),
    }
}

/// Draw `layout` onto `surface` with `font`.
pub fn draw_layout(
    surface: &mut image::RgbImage,
    font: &mut OverlayFont,
    layout: &TextLayout,
) -> PlacardResult<()> {
    let (width, height) = surface.dimensions();
    let width_u16: u16 = width
        .try_into()
        .map_err(|_| PlacardError::validation("surface width exceeds u16"))?;
    let height_u16: u16 = height
        .try_into()
        .map_err(|_| PlacardError::validation("surface height exceeds u16"))?;

    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
    for (i, line) in layout.lines.iter().enumerate() {
        let x = f64::from(layout.line_x(i, width));
        let y = f64::from(layout.line_y(i));
        font.draw(&mut ctx, line, x, y, layout.color);
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    ctx.render_to_pixmap(&mut pixmap);
    over_rgb_in_place(surface, pixmap.data_as_u8_slice())
}

/// Overlay `message` on `surface`, bottom-anchored and centered line by line.
///
/// Draws in place and returns the layout that was used. Fonts are tried in `font_candidates`
/// order before falling back to the built-in bitmap face.
#[tracing::instrument(skip(surface, font_candidates, colors, settings))]
pub fn overlay_text(
    surface: &mut image::RgbImage,
    message: &str,
    font_candidates: &[PathBuf],
    colors: &IndexMap<String, String>,
    settings: &PlacardSettings,
) -> PlacardResult<TextLayout> {
    let color = select_text_color(colors, settings.brightness_threshold);
    let mut font = resolve_font(
        font_candidates,
        settings.font_size_px,
        settings.fallback_glyph_scale,
    );

    let (width, height) = surface.dimensions();
    let layout = layout_text(&mut font, message, width, height, color, settings);
    draw_layout(surface, &mut font, &layout)?;
    Ok(layout)
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
