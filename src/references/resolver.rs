use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::foundation::error::{PlacardError, PlacardResult};

/// Prefix of per-department folders under the references root.
pub const DEPARTMENT_DIR_PREFIX: &str = "department_";
/// Flat JSON object mapping color names to hex codes.
pub const COLORS_FILE: &str = "colors.json";
pub const FONTS_DIR: &str = "fonts";
pub const LAYOUTS_DIR: &str = "layout";
pub const SUPPORT_IMAGES_DIR: &str = "reference_images";
/// Logo file names probed in priority order.
pub const LOGO_CANDIDATES: [&str; 3] = ["logotipo.png", "logo.png", "logotipo.jpg"];

pub const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Resolved brand assets for one department/material pair.
///
/// Built once by [`resolve_references`] and never mutated afterwards. Path lists are sorted
/// lexicographically so font fallback priority does not depend on directory enumeration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    colors: IndexMap<String, String>,
    fonts: Vec<PathBuf>,
    logo: Option<PathBuf>,
    layouts: Vec<PathBuf>,
    support_images: Vec<PathBuf>,
}

impl ReferenceSet {
    /// Color name to hex code, in document order.
    pub fn colors(&self) -> &IndexMap<String, String> {
        &self.colors
    }

    /// Font files in fallback priority order.
    pub fn fonts(&self) -> &[PathBuf] {
        &self.fonts
    }

    pub fn logo(&self) -> Option<&Path> {
        self.logo.as_deref()
    }

    pub fn layouts(&self) -> &[PathBuf] {
        &self.layouts
    }

    /// Additional reference imagery; not consumed by the current pipeline.
    pub fn support_images(&self) -> &[PathBuf] {
        &self.support_images
    }

    /// Hex code of the first color in document order, if any.
    pub fn first_color(&self) -> Option<&str> {
        first_color(&self.colors)
    }
}

/// First color value of `colors` in insertion order.
pub fn first_color(colors: &IndexMap<String, String>) -> Option<&str> {
    colors.values().next().map(String::as_str)
}

/// Directory holding references for `department`/`material` under `root`.
pub fn reference_dir(root: &Path, department: &str, material: &str) -> PathBuf {
    root.join(format!("{DEPARTMENT_DIR_PREFIX}{department}"))
        .join(material)
}

/// Scan `root/department_<department>/<material>` and collect its brand assets.
///
/// Only a missing base directory is an error. Absent subdirectories yield empty lists and a
/// malformed colors file yields an empty color mapping with a warning.
#[tracing::instrument(skip(root), fields(root_dir = %root.display()))]
pub fn resolve_references(
    department: &str,
    material: &str,
    root: &Path,
) -> PlacardResult<ReferenceSet> {
    let base = reference_dir(root, department, material);
    if !base.is_dir() {
        return Err(PlacardError::not_found(base.display().to_string()));
    }

    let set = ReferenceSet {
        colors: load_colors(&base.join(COLORS_FILE)),
        fonts: scan_dir(&base.join(FONTS_DIR), &FONT_EXTENSIONS),
        logo: find_logo(&base),
        layouts: scan_dir(&base.join(LAYOUTS_DIR), &IMAGE_EXTENSIONS),
        support_images: scan_dir(&base.join(SUPPORT_IMAGES_DIR), &IMAGE_EXTENSIONS),
    };

    tracing::debug!(
        colors = set.colors.len(),
        fonts = set.fonts.len(),
        logo = set.logo.is_some(),
        layouts = set.layouts.len(),
        support_images = set.support_images.len(),
        "resolved references"
    );
    Ok(set)
}

fn load_colors(path: &Path) -> IndexMap<String, String> {
    if !path.is_file() {
        return IndexMap::new();
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|s| {
            serde_json::from_str::<IndexMap<String, String>>(&s).map_err(|e| e.to_string())
        });
    match parsed {
        Ok(colors) => colors,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "colors file is not a flat JSON object of strings; ignoring it"
            );
            IndexMap::new()
        }
    }
}

fn find_logo(base: &Path) -> Option<PathBuf> {
    LOGO_CANDIDATES
        .iter()
        .map(|name| base.join(name))
        .find(|p| p.is_file())
}

fn scan_dir(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if extensions.contains(&ext.as_str()) {
            out.push(path);
        }
    }
    out.sort();
    out
}

#[cfg(test)]
#[path = "../../tests/unit/references/resolver.rs"]
mod tests;
