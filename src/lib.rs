//! Placard turns a department's brand references into campaign artwork.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `root/department_<id>/<material>/ -> ReferenceSet` (colors, fonts, logo,
//!    layout samples, support images)
//! 2. **Prompt**: `ReferenceSet + theme -> String` describing the artwork for a generative model
//! 3. **Canvas**: solid placeholder filled with the first reference color
//! 4. **Overlay**: the message wrapped to 80% of the width, centered line by line and anchored
//!    above the bottom margin, in black or white depending on background brightness
//!
//! Only a missing reference directory is a hard failure. Malformed colors metadata, unloadable
//! fonts and undecodable hex codes degrade to defaults.
#![forbid(unsafe_code)]

mod foundation;
mod prompt;
mod references;
mod render;
mod text;

pub use foundation::core::{NEUTRAL_GRAY, Rgb8, hex_to_rgb_or_default};
pub use foundation::error::{PlacardError, PlacardResult};
pub use foundation::settings::PlacardSettings;
pub use prompt::compose::{build_prompt, department_title};
pub use references::resolver::{
    COLORS_FILE, DEPARTMENT_DIR_PREFIX, FONT_EXTENSIONS, FONTS_DIR, IMAGE_EXTENSIONS,
    LAYOUTS_DIR, LOGO_CANDIDATES, ReferenceSet, SUPPORT_IMAGES_DIR, first_color, reference_dir,
    resolve_references,
};
pub use render::canvas::{base_color, generate_base};
pub use render::overlay::{TextLayout, draw_layout, layout_text, overlay_text, select_text_color};
pub use render::pipeline::{ArtRequest, RenderedArt, default_output_path, render_art, save_png};
pub use text::bitmap::BitmapFace;
pub use text::font::{
    FontSource, OutlineFace, OverlayFont, TextBrushRgba8, TextExtent, resolve_font,
};
pub use text::wrap::wrap_greedy;
