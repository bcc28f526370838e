use std::fs;
use std::path::{Path, PathBuf};

use ct_volume_engine::ctvolume::volume::SliceSource;
use ct_volume_engine::CtVolumeError;
use super::*;

/// Scratch directory under the system temp dir, removed on drop.
struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!("ctvolume_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn touch(&self, name: &str) {
        fs::write(self.path.join(name), b"").unwrap();
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

// ============================================================================
// Extension filter
// ============================================================================

#[test]
fn test_recognized_extensions() {
    assert!(has_slice_extension(Path::new("slice_000.png")));
    assert!(has_slice_extension(Path::new("slice_000.JPG")));
    assert!(has_slice_extension(Path::new("scan.tiff")));
    assert!(!has_slice_extension(Path::new("notes.txt")));
    assert!(!has_slice_extension(Path::new("slice_000")));
    assert!(!has_slice_extension(Path::new("archive.png.zip")));
}

// ============================================================================
// Enumeration
// ============================================================================

#[test]
fn test_enumeration_is_lexical_and_filtered() {
    let dir = ScratchDir::new("enumerate");
    dir.touch("slice_010.png");
    dir.touch("slice_002.png");
    dir.touch("readme.md");
    dir.touch("slice_001.png");

    let paths = enumerate_slices(&dir.path).unwrap();
    assert_eq!(
        file_names(&paths),
        vec!["slice_001.png", "slice_002.png", "slice_010.png"]
    );
}

#[test]
fn test_enumeration_of_missing_directory_fails() {
    let missing = std::env::temp_dir().join("ctvolume_definitely_missing_dir");
    let err = enumerate_slices(&missing).unwrap_err();
    assert!(matches!(err, CtVolumeError::ResourceInit(_)));
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_decode_roundtrip_through_png() {
    let dir = ScratchDir::new("decode");
    let path = dir.path.join("slice_000.png");

    let mut image = image::RgbImage::new(2, 2);
    image.put_pixel(1, 0, image::Rgb([255, 255, 255]));
    image.save(&path).unwrap();

    let source = FileSliceSource::new(path);
    assert_eq!(source.name(), "slice_000.png");

    let raster = source.decode().unwrap();
    assert_eq!(raster.width(), 2);
    assert_eq!(raster.height(), 2);
    assert!(raster.is_lit(1, 0));
    assert!(!raster.is_lit(0, 0));
    assert!(!raster.is_lit(0, 1));
    assert!(!raster.is_lit(1, 1));
}

#[test]
fn test_decode_of_garbage_bytes_fails() {
    let dir = ScratchDir::new("garbage");
    let path = dir.path.join("broken.png");
    fs::write(&path, b"this is not a png").unwrap();

    let err = FileSliceSource::new(path).decode().unwrap_err();
    assert!(matches!(err, CtVolumeError::Decode(_)));
    assert!(err.to_string().contains("broken.png"));
}
