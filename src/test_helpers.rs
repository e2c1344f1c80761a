//! Shared test utilities for the moregen test suite.
//!
//! Provides synthetic PNG fixtures and helpers for inspecting generated
//! output trees.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_source_dir(&[("logo.png", 400, 400), ("badge.png", 96, 64)]);
//! let target = tmp.path().join("out");
//!
//! // ... run a generator into `target` ...
//!
//! assert_eq!(relative_files(&target).len(), 18);
//! ```

use image::{Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write a small gradient PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    img.save(path).unwrap();
}

/// Create a temp directory holding the given `(file_name, width, height)`
/// PNG sources.
pub fn setup_source_dir(files: &[(&str, u32, u32)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for &(name, width, height) in files {
        write_png(&tmp.path().join(name), width, height);
    }
    tmp
}

// =========================================================================
// Output inspection
// =========================================================================

/// All files under `root`, as sorted `/`-separated relative paths.
pub fn relative_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

/// Pixel dimensions of a generated image, addressed relative to `root`.
pub fn dimensions_of(root: &Path, relative: &str) -> (u32, u32) {
    image::image_dimensions(root.join(relative)).unwrap()
}
