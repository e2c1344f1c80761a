//! App icon generation: one square source into every platform icon size.
//!
//! ```text
//! target/
//! ├── iOS/AppIcon.appiconset/
//! │   ├── Contents.json     (bundled template)
//! │   ├── Icon16.png
//! │   ├── ...
//! │   └── Icon1024.png
//! └── Android/
//!     ├── mipmap-mdpi/icon.png       48x48
//!     ├── mipmap-hdpi/icon.png       72x72
//!     ├── mipmap-xhdpi/icon.png      96x96
//!     ├── mipmap-xxhdpi/icon.png     144x144
//!     └── mipmap-xxxhdpi/icon.png    192x192
//! ```
//!
//! Icon sizes are absolute. The source should be at least 1024x1024; smaller
//! sources are still processed but reported as undersized. Non-square sources
//! are stretched to square.

use super::{
    ArtifactKind, GenerateError, GenerateEvent, PlannedArtifact, SourceReport, execute_plan,
    require_source, write_contents,
};
use crate::config::{AppleLayout, GeneratorConfig, LayoutConfig};
use crate::contents::write_app_icon_contents;
use crate::imaging::ImageBackend;
use crate::manifest::{
    ANDROID_ICON_FILE_NAME, ANDROID_ICONS, APPLE_ICON_SIZES, app_icon_dir, apple_icon_file_name,
    mipmap_dir,
};
use std::path::{Path, PathBuf};

/// Edge length of the largest icon; smaller sources get upscaled.
pub const MIN_ICON_SOURCE: u32 = 1024;

/// Plan every Apple and Android icon, Apple first in ascending size.
pub fn plan_app_icon(layout: &LayoutConfig) -> Vec<PlannedArtifact> {
    let apple_dir = app_icon_dir(layout);
    let apple = APPLE_ICON_SIZES.iter().map(|&size| PlannedArtifact {
        kind: ArtifactKind::AppleIcon(size),
        relative_path: apple_dir.join(apple_icon_file_name(size)),
        width: size,
        height: size,
    });
    let android = ANDROID_ICONS.iter().map(|icon| PlannedArtifact {
        kind: ArtifactKind::AndroidIcon(icon.density),
        relative_path: PathBuf::from(&layout.android_dir)
            .join(mipmap_dir(icon.density))
            .join(ANDROID_ICON_FILE_NAME),
        width: icon.size,
        height: icon.size,
    });
    apple.chain(android).collect()
}

/// Generate the full app icon set from `source` under `target_root`.
///
/// In the asset-catalog layout the bundled `Contents.json` is written into
/// the app icon set, whether or not every icon succeeded. A failed template
/// write is recorded in the report.
pub fn generate_app_icon(
    backend: &impl ImageBackend,
    source: &Path,
    target_root: &Path,
    config: &GeneratorConfig,
    on_event: &mut impl FnMut(GenerateEvent),
) -> Result<SourceReport, GenerateError> {
    require_source(source)?;
    let dimensions = backend.identify(source)?;
    on_event(GenerateEvent::SourceStarted {
        source: source.to_path_buf(),
        width: dimensions.width,
        height: dimensions.height,
    });
    if dimensions.width < MIN_ICON_SOURCE || dimensions.height < MIN_ICON_SOURCE {
        on_event(GenerateEvent::UndersizedIconSource {
            width: dimensions.width,
            height: dimensions.height,
            minimum: MIN_ICON_SOURCE,
        });
    }

    let plan = plan_app_icon(&config.layout);
    let mut report = execute_plan(
        backend,
        source,
        dimensions,
        target_root,
        plan,
        config.resize.filter,
        on_event,
    );

    if config.layout.apple == AppleLayout::AssetCatalog {
        write_contents(
            target_root,
            &app_icon_dir(&config.layout),
            &mut report,
            on_event,
            write_app_icon_contents,
        );
    }

    Ok(report)
}
