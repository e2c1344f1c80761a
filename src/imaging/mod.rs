//! Image processing behind a swappable backend.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | `DynamicImage::resize_exact` with a configurable filter |
//! | **Encode** | format inferred from the output extension (PNG, JPEG, TIFF, WebP) |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use params::{ResizeFilter, ResizeParams};
pub use rust_backend::RustBackend;
