/// Neutral gray used as canvas background when no usable reference color exists.
pub const NEUTRAL_GRAY: Rgb8 = Rgb8::new(200, 200, 200);

/// Straight (non-premultiplied) 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `RRGGBB` code, optionally `#`-prefixed.
    ///
    /// Returns `None` unless exactly six hex digits remain after stripping the prefix.
    pub fn from_hex(code: &str) -> Option<Self> {
        let digits = code.trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Uppercase `RRGGBB` without a leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Perceived brightness `0.299 R + 0.587 G + 0.114 B`, in `0.0..=255.0`.
    pub fn brightness(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(c: Rgb8) -> Self {
        image::Rgb(c.to_array())
    }
}

/// Decode `code` as a hex color, substituting `default` when it is malformed.
///
/// Shared by the canvas generator and the text overlay so both agree on fallback behavior.
pub fn hex_to_rgb_or_default(code: &str, default: Rgb8) -> Rgb8 {
    match Rgb8::from_hex(code) {
        Some(c) => c,
        None => {
            tracing::debug!(code, fallback = %default.to_hex(), "undecodable color code");
            default
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
