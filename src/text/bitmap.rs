use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts as _};

use crate::foundation::core::Rgb8;

/// Glyph cell edge in font units.
const CELL: u32 = 8;
/// Line pitch in font units; two blank rows separate stacked lines.
const LINE_CELLS: u32 = 10;

/// Built-in 8x8 bitmap face covering ASCII and Latin-1, upscaled by an integer factor.
///
/// Loading cannot fail, which makes it the terminal entry of the font fallback chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapFace {
    scale: u32,
}

impl BitmapFace {
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Horizontal advance of every character, in pixels.
    pub fn advance(&self) -> u32 {
        CELL * self.scale
    }

    pub fn line_height(&self) -> u32 {
        LINE_CELLS * self.scale
    }

    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.advance()
    }

    /// Draw `text` with its top-left corner at `(x, y)`, snapped to whole pixels.
    pub fn draw(&self, ctx: &mut vello_cpu::RenderContext, text: &str, x: f64, y: f64, color: Rgb8) {
        let s = f64::from(self.scale);
        let advance = f64::from(self.advance());
        let (x, y) = (x.round(), y.round());

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, 255,
        ));

        for (i, ch) in text.chars().enumerate() {
            let origin_x = x + advance * i as f64;
            for (row, bits) in glyph_rows(ch).iter().enumerate() {
                for col in 0..CELL {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let px = origin_x + f64::from(col) * s;
                    let py = y + row as f64 * s;
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(px, py, px + s, py + s));
                }
            }
        }
    }
}

/// Row bitmaps for `ch`, least significant bit leftmost. Unknown characters render as `?`.
pub fn glyph_rows(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

#[cfg(test)]
#[path = "../../tests/unit/text/bitmap.rs"]
mod tests;
