//! Generator configuration.
//!
//! Handles loading, validating, and merging `moregen.toml`. Stock defaults
//! reproduce the standard Xcode asset catalog and Android drawable layout, so
//! the file is only needed to deviate from them.
//!
//! ## Config File Location
//!
//! `moregen` looks for `moregen.toml` in the source directory, or loads the
//! file passed with `--config`:
//!
//! ```text
//! artwork/
//! ├── moregen.toml        # optional
//! ├── logo.png
//! └── badge.png
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [layout]
//! apple = "asset-catalog"   # or "flat"
//! apple_dir = "iOS"
//! android_dir = "Android"
//!
//! [resources]
//! buckets = ["pixel", "pixel2", "pixel3", "mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"]
//!
//! [resize]
//! filter = "lanczos3"       # nearest | triangle | catmull-rom | gaussian | lanczos3
//! ```
//!
//! Unknown keys and unknown bucket tags are rejected to catch typos early.

use crate::density::Resolution;
use crate::imaging::ResizeFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

/// Name of the config file looked up in the source directory.
pub const CONFIG_FILE_NAME: &str = "moregen.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `moregen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Output directory layout.
    pub layout: LayoutConfig,
    /// Which buckets the resource fan-out produces.
    pub resources: ResourcesConfig,
    /// Resampling settings.
    pub resize: ResizeConfig,
}

/// How Apple artifacts are laid out under the Apple directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppleLayout {
    /// `iOS/<name>.imageset/` with a `Contents.json` per image, and
    /// `iOS/AppIcon.appiconset/` for icons.
    #[default]
    AssetCatalog,
    /// `iOS/<name>@2x.png` side by side, `iOS/AppIcon/` for icons, no JSON.
    Flat,
}

/// Output directory layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub apple: AppleLayout,
    /// Apple output directory, relative to the target root.
    pub apple_dir: String,
    /// Android output directory, relative to the target root.
    pub android_dir: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            apple: AppleLayout::AssetCatalog,
            apple_dir: "iOS".to_string(),
            android_dir: "Android".to_string(),
        }
    }
}

/// Resource fan-out selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Target buckets to generate. Order is irrelevant; artifacts are always
    /// produced in manifest order.
    pub buckets: Vec<Resolution>,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            buckets: Resolution::ALL.to_vec(),
        }
    }
}

/// Resampling settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    pub filter: ResizeFilter,
}

impl GeneratorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resources.buckets.is_empty() {
            return Err(ConfigError::Validation(
                "resources.buckets must not be empty".into(),
            ));
        }
        for (i, bucket) in self.resources.buckets.iter().enumerate() {
            if self.resources.buckets[..i].contains(bucket) {
                return Err(ConfigError::Validation(format!(
                    "resources.buckets lists '{bucket}' more than once"
                )));
            }
        }
        validate_relative_dir("layout.apple_dir", &self.layout.apple_dir)?;
        validate_relative_dir("layout.android_dir", &self.layout.android_dir)?;
        Ok(())
    }
}

fn validate_relative_dir(key: &str, value: &str) -> Result<(), ConfigError> {
    let path = Path::new(value);
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    if path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(ConfigError::Validation(format!(
            "{key} must be a relative path without '..' ({value})"
        )));
    }
    Ok(())
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GeneratorConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge an optional overlay onto the stock defaults, then deserialize and
/// validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<GeneratorConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GeneratorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config.
///
/// An explicit path must exist. Otherwise `moregen.toml` in `source_root` is
/// used when present, and stock defaults when not.
pub fn load_config(
    explicit: Option<&Path>,
    source_root: &Path,
) -> Result<GeneratorConfig, ConfigError> {
    let overlay = match explicit {
        Some(path) => Some(load_raw_config(path)?),
        None => {
            let path = source_root.join(CONFIG_FILE_NAME);
            if path.is_file() {
                Some(load_raw_config(&path)?)
            } else {
                None
            }
        }
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock `moregen.toml`.
///
/// Printed by `moregen --gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# moregen configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to your source images as moregen.toml, or pass it
# with --config. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Output layout
# ---------------------------------------------------------------------------
[layout]
# "asset-catalog": iOS/<name>.imageset/ with Contents.json per image and
#                  iOS/AppIcon.appiconset/ with the app icon Contents.json.
# "flat":          iOS/<name>.png, <name>@2x.png, <name>@3x.png side by side
#                  and iOS/AppIcon/ for icons. No JSON is written.
apple = "asset-catalog"

# Output directories, relative to the target directory.
apple_dir = "iOS"
android_dir = "Android"

# ---------------------------------------------------------------------------
# Resource fan-out
# ---------------------------------------------------------------------------
[resources]
# Buckets to generate from each source image (authored at xxxhdpi / 4x).
# Apple: pixel (1x), pixel2 (2x), pixel3 (3x)
# Android: mdpi, hdpi, xhdpi, xxhdpi, xxxhdpi
buckets = ["pixel", "pixel2", "pixel3", "mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"]

# ---------------------------------------------------------------------------
# Resampling
# ---------------------------------------------------------------------------
[resize]
# nearest | triangle | catmull-rom | gaussian | lanczos3
filter = "lanczos3"
"##
}
