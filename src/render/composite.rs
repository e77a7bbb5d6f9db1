use crate::foundation::error::{PlacardError, PlacardResult};

pub type PremulRgba8 = [u8; 4];

/// Source-over of a premultiplied pixel onto an opaque RGB pixel.
pub fn over_opaque(dst: [u8; 3], src: PremulRgba8) -> [u8; 3] {
    if src[3] == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 3];
    for i in 0..3 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Composite a premultiplied RGBA8 layer over an opaque RGB surface of the same size.
pub fn over_rgb_in_place(dst: &mut image::RgbImage, src: &[u8]) -> PlacardResult<()> {
    let pixels = dst.width() as usize * dst.height() as usize;
    if src.len() != pixels * 4 {
        return Err(PlacardError::render(
            "text layer does not match surface dimensions",
        ));
    }
    for (d, s) in dst.pixels_mut().zip(src.chunks_exact(4)) {
        d.0 = over_opaque(d.0, [s[0], s[1], s[2], s[3]]);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
