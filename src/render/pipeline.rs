use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::error::PlacardResult,
    foundation::settings::PlacardSettings,
    prompt::compose::build_prompt,
    references::resolver::{ReferenceSet, resolve_references},
    render::canvas::generate_base,
    render::overlay::{TextLayout, overlay_text},
};

/// Inputs for one piece of artwork.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtRequest {
    /// Department id; references live in `<root>/department_<department>/`.
    pub department: String,
    /// Material type such as `banner` or `poster`.
    pub material: String,
    /// Theme interpolated into the prompt.
    pub theme: String,
    /// Text drawn on the canvas.
    pub message: String,
    /// References root directory.
    pub root: PathBuf,
}

/// Everything produced by [`render_art`].
#[derive(Clone, Debug)]
pub struct RenderedArt {
    pub references: ReferenceSet,
    pub prompt: String,
    pub image: image::RgbImage,
    pub layout: TextLayout,
}

/// Resolve references, compose the prompt, generate the base canvas and overlay the message.
///
/// Fails with [`crate::PlacardError::NotFound`] before producing anything when the reference
/// directory is missing.
#[tracing::instrument(skip(req, settings), fields(department = %req.department, material = %req.material))]
pub fn render_art(req: &ArtRequest, settings: &PlacardSettings) -> PlacardResult<RenderedArt> {
    settings.validate()?;

    let references = resolve_references(&req.department, &req.material, &req.root)?;
    let prompt = build_prompt(
        &req.department,
        &req.material,
        &req.theme,
        references.colors(),
        references.fonts(),
        references.layouts().len(),
    );

    let mut image = generate_base(
        references.colors(),
        settings.canvas_width,
        settings.canvas_height,
    );
    let layout = overlay_text(
        &mut image,
        &req.message,
        references.fonts(),
        references.colors(),
        settings,
    )?;

    Ok(RenderedArt {
        references,
        prompt,
        image,
        layout,
    })
}

/// `art_<department>_<material>.png` in the working directory.
pub fn default_output_path(department: &str, material: &str) -> PathBuf {
    PathBuf::from(format!("art_{department}_{material}.png"))
}

/// Write `image` as PNG, creating the parent directory if needed.
pub fn save_png(image: &image::RgbImage, path: &Path) -> PlacardResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
