//! Pixel conversion between Apple point scales and Android density buckets.
//!
//! Every conversion goes through a common intermediate unit: Android
//! mdpi-equivalent pixels ("dp"). Apple buckets reach that unit through the
//! fixed `160/163` ratio between the Android dp baseline (160 dpi) and the
//! original iPhone point density (163 ppi).
//!
//! ```text
//! value @ from ──normalize──▶ dp ──denormalize──▶ value @ to ──round──▶ u32
//! ```
//!
//! | bucket | family | factor |
//! |---|---|---|
//! | `pixel` | apple | 1 |
//! | `pixel2` | apple | 2 |
//! | `pixel3` | apple | 3 |
//! | `mdpi` | android | 1.0 |
//! | `hdpi` | android | 1.5 |
//! | `xhdpi` | android | 2.0 |
//! | `xxhdpi` | android | 3.0 |
//! | `xxxhdpi` | android | 4.0 |
//!
//! ## Rounding
//!
//! Results are rounded half-to-even (`f64::round_ties_even`). A 10px xxxhdpi
//! edge converts to 2.5 mdpi pixels and lands on 2, not 3.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Android dp per Apple point.
const APPLE_TO_DP: f64 = 160.0 / 163.0;
/// Apple points per Android dp.
const DP_TO_APPLE: f64 = 163.0 / 160.0;

/// Which platform a bucket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Apple,
    Android,
}

/// A named pixel-density context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Pixel,
    Pixel2,
    Pixel3,
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Resolution {
    /// All buckets, Apple first, each family in ascending density.
    pub const ALL: [Resolution; 8] = [
        Resolution::Pixel,
        Resolution::Pixel2,
        Resolution::Pixel3,
        Resolution::Mdpi,
        Resolution::Hdpi,
        Resolution::Xhdpi,
        Resolution::Xxhdpi,
        Resolution::Xxxhdpi,
    ];

    /// Android buckets in ascending density.
    pub const ANDROID: [Resolution; 5] = [
        Resolution::Mdpi,
        Resolution::Hdpi,
        Resolution::Xhdpi,
        Resolution::Xxhdpi,
        Resolution::Xxxhdpi,
    ];

    pub fn family(self) -> Family {
        match self {
            Resolution::Pixel | Resolution::Pixel2 | Resolution::Pixel3 => Family::Apple,
            Resolution::Mdpi
            | Resolution::Hdpi
            | Resolution::Xhdpi
            | Resolution::Xxhdpi
            | Resolution::Xxxhdpi => Family::Android,
        }
    }

    /// Scale factor relative to the family baseline (`pixel` or `mdpi`).
    pub fn factor(self) -> f64 {
        match self {
            Resolution::Pixel => 1.0,
            Resolution::Pixel2 => 2.0,
            Resolution::Pixel3 => 3.0,
            Resolution::Mdpi => 1.0,
            Resolution::Hdpi => 1.5,
            Resolution::Xhdpi => 2.0,
            Resolution::Xxhdpi => 3.0,
            Resolution::Xxxhdpi => 4.0,
        }
    }

    /// Pixels per mdpi-equivalent pixel at this bucket.
    ///
    /// `pixel` is slightly denser than `mdpi` (163/160).
    pub fn pixels_per_dp(self) -> f64 {
        match self.family() {
            Family::Apple => DP_TO_APPLE * self.factor(),
            Family::Android => self.factor(),
        }
    }

    /// Lowercase tag used in config files and console output.
    pub fn tag(self) -> &'static str {
        match self {
            Resolution::Pixel => "pixel",
            Resolution::Pixel2 => "pixel2",
            Resolution::Pixel3 => "pixel3",
            Resolution::Mdpi => "mdpi",
            Resolution::Hdpi => "hdpi",
            Resolution::Xhdpi => "xhdpi",
            Resolution::Xxhdpi => "xxhdpi",
            Resolution::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Asset catalog scale tag (`1x`, `2x`, `3x`). `None` for Android buckets.
    pub fn apple_scale_tag(self) -> Option<&'static str> {
        match self {
            Resolution::Pixel => Some("1x"),
            Resolution::Pixel2 => Some("2x"),
            Resolution::Pixel3 => Some("3x"),
            Resolution::Mdpi
            | Resolution::Hdpi
            | Resolution::Xhdpi
            | Resolution::Xxhdpi
            | Resolution::Xxxhdpi => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Convert a pixel measurement at `from` into dp.
fn normalize(value: f64, from: Resolution) -> f64 {
    match from.family() {
        Family::Apple => value / from.factor() * APPLE_TO_DP,
        Family::Android => value / from.factor(),
    }
}

/// Convert dp into pixels at `to`.
fn denormalize(dp: f64, to: Resolution) -> f64 {
    match to.family() {
        Family::Apple => dp * DP_TO_APPLE * to.factor(),
        Family::Android => dp * to.factor(),
    }
}

/// Convert a pixel measurement captured at `from` to the equivalent at `to`.
///
/// Width and height are converted independently with this same function. No
/// clamping is applied: tiny inputs may legitimately round down to 0.
///
/// # Examples
/// ```
/// use moregen::density::{Resolution, convert};
///
/// // 1024px at 4x is 256 dp, which is 260.8 points on a 1x Apple display
/// assert_eq!(convert(1024, Resolution::Xxxhdpi, Resolution::Pixel), 261);
/// assert_eq!(convert(1024, Resolution::Xxxhdpi, Resolution::Hdpi), 384);
/// ```
pub fn convert(value: u32, from: Resolution, to: Resolution) -> u32 {
    let dp = normalize(f64::from(value), from);
    denormalize(dp, to).round_ties_even() as u32
}

/// Convert a `(width, height)` pair.
pub fn convert_dimensions(
    (width, height): (u32, u32),
    from: Resolution,
    to: Resolution,
) -> (u32, u32) {
    (convert(width, from, to), convert(height, from, to))
}
