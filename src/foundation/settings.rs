use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{PlacardError, PlacardResult};

/// Tunable constants for canvas generation and text overlay.
///
/// Every field has a documented default; JSON settings files may set any subset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacardSettings {
    /// Base canvas width in pixels. Default `1024`.
    pub canvas_width: u32,
    /// Base canvas height in pixels. Default `768`.
    pub canvas_height: u32,
    /// Distance between the bottom of the text block and the bottom edge. Default `50`.
    pub bottom_margin: u32,
    /// Size used when loading scalable fonts. Default `48.0`.
    pub font_size_px: f32,
    /// Brightness strictly above this selects black text, otherwise white. Default `186.0`.
    pub brightness_threshold: f64,
    /// Fraction of the surface width a line may occupy. Default `0.8`.
    pub max_line_width_ratio: f64,
    /// Integer upscale applied to the built-in 8x8 bitmap font. Default `3`.
    pub fallback_glyph_scale: u32,
}

impl Default for PlacardSettings {
    fn default() -> Self {
        Self {
            canvas_width: 1024,
            canvas_height: 768,
            bottom_margin: 50,
            font_size_px: 48.0,
            brightness_threshold: 186.0,
            max_line_width_ratio: 0.8,
            fallback_glyph_scale: 3,
        }
    }
}

impl PlacardSettings {
    /// Load settings from a JSON file and validate them.
    pub fn from_path(path: &Path) -> PlacardResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open settings '{}'", path.display()))?;
        let settings: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse settings JSON '{}'", path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> PlacardResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(PlacardError::validation("canvas dimensions must be > 0"));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlacardError::validation(
                "font_size_px must be finite and > 0",
            ));
        }
        if !self.brightness_threshold.is_finite() {
            return Err(PlacardError::validation(
                "brightness_threshold must be finite",
            ));
        }
        if !(self.max_line_width_ratio > 0.0 && self.max_line_width_ratio <= 1.0) {
            return Err(PlacardError::validation(
                "max_line_width_ratio must be in (0, 1]",
            ));
        }
        if self.fallback_glyph_scale == 0 {
            return Err(PlacardError::validation(
                "fallback_glyph_scale must be > 0",
            ));
        }
        Ok(())
    }

    /// Pixel width budget for one line on a surface `surface_width` pixels wide.
    pub fn line_width_budget(&self, surface_width: u32) -> f32 {
        (f64::from(surface_width) * self.max_line_width_ratio).floor() as f32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;
