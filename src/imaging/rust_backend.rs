//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, WebP) | `image::ImageReader` |
//! | Identify | `image::image_dimensions` (header only, no full decode) |
//! | Resize | `DynamicImage::resize_exact` |
//! | Encode | `DynamicImage::save`, format from the output extension |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::ResizeParams;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    img.save(path).map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
    })
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        if params.width == 0 || params.height == 0 {
            return Err(BackendError::InvalidDimensions {
                width: params.width,
                height: params.height,
            });
        }
        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.width, params.height, params.filter.filter_type());
        save_image(&resized, &params.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::ResizeFilter;
    use crate::test_helpers::write_png;

    #[test]
    fn identify_synthetic_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.png");
        write_png(&path, 200, 150);

        let backend = RustBackend::new();
        let dims = backend.identify(&path).unwrap();
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 150);
    }

    #[test]
    fn identify_nonexistent_file_errors() {
        let backend = RustBackend::new();
        let result = backend.identify(Path::new("/nonexistent/image.png"));
        assert!(result.is_err());
    }

    #[test]
    fn resize_writes_exact_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.png");
        write_png(&source, 400, 300);

        let output = tmp.path().join("resized.png");
        let backend = RustBackend::new();
        backend
            .resize(&ResizeParams {
                source,
                output: output.clone(),
                width: 120,
                height: 120,
                filter: ResizeFilter::Lanczos3,
            })
            .unwrap();

        assert_eq!(image::image_dimensions(&output).unwrap(), (120, 120));
    }

    #[test]
    fn resize_to_zero_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.png");
        write_png(&source, 4, 4);

        let output = tmp.path().join("zero.png");
        let result = RustBackend::new().resize(&ResizeParams {
            source,
            output: output.clone(),
            width: 1,
            height: 0,
            filter: ResizeFilter::Nearest,
        });
        assert!(matches!(
            result,
            Err(BackendError::InvalidDimensions {
                width: 1,
                height: 0
            })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn resize_corrupt_source_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("broken.png");
        std::fs::write(&source, b"not a png").unwrap();

        let result = RustBackend::new().resize(&ResizeParams {
            source,
            output: tmp.path().join("out.png"),
            width: 10,
            height: 10,
            filter: ResizeFilter::default(),
        });
        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
    }

    #[test]
    fn resize_unknown_output_extension_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("source.png");
        write_png(&source, 16, 16);

        let result = RustBackend::new().resize(&ResizeParams {
            source,
            output: tmp.path().join("out.unknownext"),
            width: 8,
            height: 8,
            filter: ResizeFilter::default(),
        });
        assert!(result.is_err());
    }
}
