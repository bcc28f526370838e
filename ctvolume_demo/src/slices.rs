/// Slice file enumeration and decoding — the external collaborators the
/// engine's ingestor trusts.
///
/// Enumeration yields a total, deterministic order (lexical by file
/// name); the ingestor consumes that order verbatim as depth order.
/// Decoding goes through the `image` crate and converts everything to
/// RGB8 before handing it to the engine.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use ct_volume_engine::ctvolume::volume::{SliceRaster, SliceSource};
use ct_volume_engine::{CtVolumeError, CtVolumeResult};

/// File extensions recognized as slice images (case-insensitive)
pub const SLICE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tga", "tif", "tiff"];

/// List the slice images in `dir`, sorted lexically by file name.
///
/// # Errors
///
/// [`CtVolumeError::ResourceInit`] when the directory cannot be read.
pub fn enumerate_slices(dir: &Path) -> CtVolumeResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        CtVolumeError::ResourceInit(format!("cannot read slice directory '{}': {}", dir.display(), e))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            CtVolumeError::ResourceInit(format!("cannot read entry in '{}': {}", dir.display(), e))
        })?;
        let path = entry.path();
        if path.is_file() && has_slice_extension(&path) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn has_slice_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| SLICE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// A slice image on disk, decoded on demand.
pub struct FileSliceSource {
    path: PathBuf,
    name: String,
}

impl FileSliceSource {
    /// Wrap one slice file
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Wrap an already-ordered path list
    pub fn from_paths(paths: Vec<PathBuf>) -> Vec<Self> {
        paths.into_iter().map(Self::new).collect()
    }
}

impl SliceSource for FileSliceSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn decode(&self) -> CtVolumeResult<SliceRaster> {
        let image = image::open(&self.path)
            .map_err(|e| CtVolumeError::Decode(format!("{}: {}", self.name, e)))?;
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels: Vec<[u8; 3]> = rgb.pixels().map(|pixel| pixel.0).collect();
        SliceRaster::new(width, height, pixels)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "slices_tests.rs"]
mod tests;
