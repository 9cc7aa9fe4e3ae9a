// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for preview pages.
//!
//! The browser never caches decoded images across pages; each freshly
//! constructed page requests its own load. Decoding happens off the UI
//! thread via `Task::perform` in the application update loop.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

pub mod extensions {
    //! Supported raster extensions, used when expanding a directory
    //! argument into a photo sequence.

    use std::path::Path;

    pub const RASTER: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "webp", "bmp", "ico", "tiff", "tif",
    ];

    /// Checks whether the path has a supported raster extension.
    pub fn is_supported(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let lower = ext.to_ascii_lowercase();
                RASTER.contains(&lower.as_str())
            })
    }
}

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Loads and decodes the image backing a photo.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// the bytes are not a supported raster format.
pub fn load_photo<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
    let img = image_rs::load_from_memory(&bytes).map_err(|e| Error::Image(e.to_string()))?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Expands a directory into the supported images it contains, sorted
/// alphabetically. Non-recursive; subdirectories are skipped.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be read.
pub fn expand_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && extensions::is_supported(path))
        .collect();
    images.sort();
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_photo(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist.png");

        match load_photo(&missing) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_photo(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error, got {other:?}"),
        }
    }

    #[test]
    fn expand_directory_finds_sorted_images() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["b.png", "a.jpg", "notes.txt"] {
            fs::write(temp_dir.path().join(name), b"data").expect("write fixture");
        }

        let images = expand_directory(temp_dir.path()).expect("scan failed");
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png"]);
    }

    #[test]
    fn expand_directory_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("create dir");
        fs::write(temp_dir.path().join("a.png"), b"data").expect("write fixture");

        let images = expand_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(extensions::is_supported(Path::new("photo.JPG")));
        assert!(extensions::is_supported(Path::new("photo.png")));
        assert!(!extensions::is_supported(Path::new("photo.mp4")));
        assert!(!extensions::is_supported(Path::new("photo")));
    }
}
