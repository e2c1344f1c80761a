//! Xcode asset catalog `Contents.json` files.
//!
//! Image sets get a generated descriptor listing the 1x/2x/3x variants:
//!
//! ```json
//! {
//!   "images": [
//!     { "filename": "logo.png", "scale": "1x", "idiom": "universal" },
//!     { "filename": "logo@2x.png", "scale": "2x", "idiom": "universal" },
//!     { "filename": "logo@3x.png", "scale": "3x", "idiom": "universal" }
//!   ],
//!   "info": { "version": 1, "author": "xcode" }
//! }
//! ```
//!
//! The app icon set uses a fixed template bundled into the binary, covering
//! iPhone, iPad, Watch, Mac and marketing slots. Every `IconN.png` it
//! references is produced by the app icon generator.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const CONTENTS_FILE_NAME: &str = "Contents.json";

/// `Contents.json` of `AppIcon.appiconset`, copied verbatim.
pub const APP_ICON_CONTENTS_JSON: &str = include_str!("../assets/AppIcon.Contents.json");

/// `Contents.json` of an `.imageset` directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSetContents {
    pub images: Vec<ImageSetEntry>,
    pub info: ContentsInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSetEntry {
    pub filename: String,
    pub scale: String,
    pub idiom: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentsInfo {
    pub version: u32,
    pub author: String,
}

impl Default for ContentsInfo {
    fn default() -> Self {
        Self {
            version: 1,
            author: "xcode".to_string(),
        }
    }
}

impl ImageSetContents {
    /// Build a descriptor from `(filename, scale)` pairs, all `universal`.
    pub fn universal<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            images: files
                .into_iter()
                .map(|(filename, scale)| ImageSetEntry {
                    filename: filename.to_string(),
                    scale: scale.to_string(),
                    idiom: "universal".to_string(),
                })
                .collect(),
            info: ContentsInfo::default(),
        }
    }

    /// Write `Contents.json` into `dir`.
    pub fn write(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(CONTENTS_FILE_NAME);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json + "\n")?;
        Ok(path)
    }
}

/// Write the bundled app icon `Contents.json` into `dir`.
pub fn write_app_icon_contents(dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(CONTENTS_FILE_NAME);
    fs::write(&path, APP_ICON_CONTENTS_JSON)?;
    Ok(path)
}
