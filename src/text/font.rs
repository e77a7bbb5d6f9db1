use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::core::Rgb8,
    foundation::error::{PlacardError, PlacardResult},
    text::bitmap::BitmapFace,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgb8> for TextBrushRgba8 {
    fn from(c: Rgb8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// Rendered size of a single line of text, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Where the face used for an overlay came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// Scalable font loaded from this file.
    File(PathBuf),
    /// Built-in bitmap fallback.
    Builtin,
}

/// Scalable font face backed by font file bytes, shaped with Parley and drawn with vello_cpu.
pub struct OutlineFace {
    path: PathBuf,
    family: String,
    size_px: f32,
    font: vello_cpu::peniko::FontData,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl std::fmt::Debug for OutlineFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFace")
            .field("path", &self.path)
            .field("family", &self.family)
            .field("size_px", &self.size_px)
            .finish()
    }
}

impl OutlineFace {
    /// Read and register the font at `path`.
    ///
    /// Fails if the file cannot be read or contains no usable font family.
    pub fn load(path: &Path, size_px: f32) -> PlacardResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PlacardError::validation(
                "font size_px must be finite and > 0",
            ));
        }

        let font_bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;

        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            PlacardError::validation(format!(
                "no font families registered from '{}'",
                path.display()
            ))
        })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PlacardError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);

        Ok(Self {
            path: path.to_path_buf(),
            family,
            size_px,
            font,
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    fn layout(&mut self, text: &str, brush: TextBrushRgba8) -> parley::Layout<TextBrushRgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    pub fn measure(&mut self, text: &str) -> TextExtent {
        let layout = self.layout(text, TextBrushRgba8::default());
        TextExtent {
            width: layout.width(),
            height: layout.height(),
        }
    }

    pub fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        x: f64,
        y: f64,
        color: Rgb8,
    ) {
        let layout = self.layout(text, color.into());
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                // Line-relative positions with the baseline applied.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

/// Face selected for an overlay: a scalable font or the built-in bitmap fallback.
#[derive(Debug)]
pub enum OverlayFont {
    Outline(OutlineFace),
    Bitmap(BitmapFace),
}

impl OverlayFont {
    pub fn source(&self) -> FontSource {
        match self {
            Self::Outline(face) => FontSource::File(face.path().to_path_buf()),
            Self::Bitmap(_) => FontSource::Builtin,
        }
    }

    pub fn measure(&mut self, text: &str) -> TextExtent {
        match self {
            Self::Outline(face) => face.measure(text),
            Self::Bitmap(face) => TextExtent {
                width: face.text_width(text) as f32,
                height: face.line_height() as f32,
            },
        }
    }

    /// Draw one line with its top-left corner at `(x, y)`.
    pub fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        x: f64,
        y: f64,
        color: Rgb8,
    ) {
        match self {
            Self::Outline(face) => face.draw(ctx, text, x, y, color),
            Self::Bitmap(face) => face.draw(ctx, text, x, y, color),
        }
    }
}

/// Try each candidate once, in order, and return the first font that loads.
///
/// Falls back to the built-in bitmap face when the list is empty or every candidate fails.
pub fn resolve_font(candidates: &[PathBuf], size_px: f32, fallback_scale: u32) -> OverlayFont {
    for path in candidates {
        match OutlineFace::load(path, size_px) {
            Ok(face) => {
                tracing::debug!(path = %path.display(), family = face.family(), "loaded font");
                return OverlayFont::Outline(face);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unloadable font");
            }
        }
    }

    tracing::debug!("no usable font candidates; using built-in bitmap font");
    OverlayFont::Bitmap(BitmapFace::new(fallback_scale))
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
