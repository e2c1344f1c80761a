//! Static fan-out manifests and output naming.
//!
//! The resource manifest lists the eight artifacts produced for each source
//! image. Every entry converts from the `xxxhdpi` baseline: source artwork is
//! assumed to be authored at 4x.
//!
//! ```text
//! fan-out for logo.png (asset-catalog layout)
//! ├── iOS/logo.imageset/logo.png            pixel
//! ├── iOS/logo.imageset/logo@2x.png         pixel2
//! ├── iOS/logo.imageset/logo@3x.png         pixel3
//! ├── Android/drawable/logo.png             mdpi
//! ├── Android/drawable-hdpi/logo.png        hdpi
//! ├── Android/drawable-xhdpi/logo.png       xhdpi
//! ├── Android/drawable-xxhdpi/logo.png      xxhdpi
//! └── Android/drawable-xxxhdpi/logo.png     xxxhdpi
//! ```
//!
//! The icon manifests are absolute pixel sizes; no density math applies.

use crate::config::{AppleLayout, LayoutConfig};
use crate::density::Resolution;
use std::path::PathBuf;

/// Density every source image is assumed to be authored at.
pub const SOURCE_BASELINE: Resolution = Resolution::Xxxhdpi;

/// One artifact of the resource fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub from: Resolution,
    pub to: Resolution,
}

/// The full Apple + Android resource fan-out, in generation order.
pub const RESOURCE_MANIFEST: [ManifestEntry; 8] = [
    ManifestEntry { from: SOURCE_BASELINE, to: Resolution::Pixel },
    ManifestEntry { from: SOURCE_BASELINE, to: Resolution::Pixel2 },
    ManifestEntry { from: SOURCE_BASELINE, to: Resolution::Pixel3 },
    ManifestEntry { from: SOURCE_BASELINE, to: Resolution::Mdpi },
    ManifestEntry { from: SOURCE_BASELINE, to: Resolution::Hdpi },
    ManifestEntry { from: SOURCE_BASELINE, to: Resolution::Xhdpi },
    ManifestEntry { from: SOURCE_BASELINE, to: Resolution::Xxhdpi },
    ManifestEntry { from: SOURCE_BASELINE, to: Resolution::Xxxhdpi },
];

/// Manifest entries whose target bucket is in `buckets`, in manifest order.
pub fn select_entries(buckets: &[Resolution]) -> Vec<ManifestEntry> {
    RESOURCE_MANIFEST
        .iter()
        .filter(|entry| buckets.contains(&entry.to))
        .copied()
        .collect()
}

/// Square pixel sizes of the Apple app icon set (iPhone, iPad, Mac, Watch,
/// marketing).
pub const APPLE_ICON_SIZES: [u32; 26] = [
    16, 20, 29, 32, 40, 48, 55, 58, 60, 64, 76, 80, 87, 88, 100, 120, 128, 152, 167, 172, 180,
    196, 216, 256, 512, 1024,
];

/// Android launcher icon size for one density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndroidIcon {
    pub density: Resolution,
    pub size: u32,
}

/// Launcher icons: 48dp rendered at each density.
pub const ANDROID_ICONS: [AndroidIcon; 5] = [
    AndroidIcon { density: Resolution::Mdpi, size: 48 },
    AndroidIcon { density: Resolution::Hdpi, size: 72 },
    AndroidIcon { density: Resolution::Xhdpi, size: 96 },
    AndroidIcon { density: Resolution::Xxhdpi, size: 144 },
    AndroidIcon { density: Resolution::Xxxhdpi, size: 192 },
];

/// File name of an Apple icon of the given size.
pub fn apple_icon_file_name(size: u32) -> String {
    format!("Icon{size}.png")
}

/// File name written into every Android mipmap directory.
pub const ANDROID_ICON_FILE_NAME: &str = "icon.png";

/// Source file name split into the parts the naming rules need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceName {
    /// File name without extension (`logo` for `logo.png`).
    pub stem: String,
    /// Extension including the leading dot, or empty.
    pub extension: String,
}

impl SourceName {
    pub fn new(stem: impl Into<String>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            stem: stem.into(),
            extension: if extension.is_empty() || extension.starts_with('.') {
                extension
            } else {
                format!(".{extension}")
            },
        }
    }

    /// `logo` + `@2x` → `logo@2x.png`
    pub fn with_suffix(&self, suffix: &str) -> String {
        format!("{}{}{}", self.stem, suffix, self.extension)
    }

    pub fn file_name(&self) -> String {
        self.with_suffix("")
    }

    /// Asset catalog directory name (`logo.imageset`).
    pub fn imageset_dir(&self) -> String {
        format!("{}.imageset", self.stem)
    }
}

/// Android drawable directory for a density. `mdpi` uses the unqualified
/// `drawable` directory; Apple buckets have none.
pub fn drawable_dir(density: Resolution) -> Option<String> {
    match density {
        Resolution::Mdpi => Some("drawable".to_string()),
        Resolution::Hdpi | Resolution::Xhdpi | Resolution::Xxhdpi | Resolution::Xxxhdpi => {
            Some(format!("drawable-{}", density.tag()))
        }
        Resolution::Pixel | Resolution::Pixel2 | Resolution::Pixel3 => None,
    }
}

/// Android mipmap directory for a density. Every density is qualified.
pub fn mipmap_dir(density: Resolution) -> String {
    format!("mipmap-{}", density.tag())
}

impl ManifestEntry {
    /// Suffix appended to the stem of Apple artifacts.
    fn apple_suffix(self) -> &'static str {
        match self.to {
            Resolution::Pixel => "",
            Resolution::Pixel2 => "@2x",
            Resolution::Pixel3 => "@3x",
            Resolution::Mdpi
            | Resolution::Hdpi
            | Resolution::Xhdpi
            | Resolution::Xxhdpi
            | Resolution::Xxxhdpi => "",
        }
    }

    /// File name of the artifact, without its directory.
    pub fn file_name(self, name: &SourceName) -> String {
        name.with_suffix(self.apple_suffix())
    }

    /// Path of the artifact relative to the target root.
    pub fn relative_path(self, layout: &LayoutConfig, name: &SourceName) -> PathBuf {
        match drawable_dir(self.to) {
            Some(dir) => PathBuf::from(&layout.android_dir)
                .join(dir)
                .join(self.file_name(name)),
            None => apple_dir_for(layout, name).join(self.file_name(name)),
        }
    }
}

/// Directory holding the Apple artifacts of one source, relative to the
/// target root.
pub fn apple_dir_for(layout: &LayoutConfig, name: &SourceName) -> PathBuf {
    let root = PathBuf::from(&layout.apple_dir);
    match layout.apple {
        AppleLayout::AssetCatalog => root.join(name.imageset_dir()),
        AppleLayout::Flat => root,
    }
}

/// Directory holding the Apple app icons, relative to the target root.
pub fn app_icon_dir(layout: &LayoutConfig) -> PathBuf {
    let root = PathBuf::from(&layout.apple_dir);
    match layout.apple {
        AppleLayout::AssetCatalog => root.join("AppIcon.appiconset"),
        AppleLayout::Flat => root.join("AppIcon"),
    }
}
