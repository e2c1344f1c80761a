//! # moregen
//!
//! Generate iOS and Android image resources from a single high-resolution
//! PNG. Artwork is authored once at Android `xxxhdpi` (4x) and fanned out to
//! every Apple point scale and Android density bucket, or turned into a full
//! app icon set.
//!
//! # Architecture: Resolve, Scaffold, Generate
//!
//! ```text
//! 1. Resolve   CLI args      →  Plan              (mode, roots, source list)
//! 2. Scaffold  Plan          →  target dirs       (idempotent create_dir_all)
//! 3. Generate  each source   →  artifacts + JSON  (plan → resize, per artifact)
//! ```
//!
//! Every generator splits into a pure planning step (relative paths and pixel
//! sizes computed from the source dimensions) and an execution step that
//! drives an [`imaging::ImageBackend`]. Planning is unit-tested without
//! touching the filesystem; execution is tested with a recording mock
//! backend and, end to end, with tiny real PNGs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`density`] | Pixel conversion between Apple scales and Android buckets |
//! | [`manifest`] | Static fan-out and icon tables, output naming rules |
//! | [`resolve`] | CLI arguments → [`resolve::Plan`] (batch, single file, app icon) |
//! | [`pipeline`] | Scaffolding and the sequential per-source run loop |
//! | [`generate`] | Resource fan-out and app icon generators, progress events |
//! | [`contents`] | Xcode `Contents.json` for image sets and the app icon set |
//! | [`imaging`] | `ImageBackend` trait and the pure-Rust `image` crate backend |
//! | [`config`] | Optional `moregen.toml`: layout, bucket selection, resize filter |
//! | [`include_list`] | `ResourcesIncludeList.txt` for Xamarin Android projects |
//! | [`output`] | CLI output formatting for both binaries |
//!
//! # Design Decisions
//!
//! ## Density Math Through dp
//!
//! Conversions normalize to Android mdpi pixels and denormalize to the target.
//! Apple points carry the `163/160` ratio between the original iPhone screen
//! and the Android baseline, so `pixel` output is about 2% larger than `mdpi`
//! output for the same source. Rounding is half-to-even. See [`density`].
//!
//! ## Continue Past Failures
//!
//! A failed artifact never aborts its source, and a failed source never
//! aborts the batch. Failures surface as [`generate::GenerateEvent`]s and in
//! the final [`pipeline::RunSummary`].
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, resampling and encoding use the `image` crate only. The binary
//! has no runtime dependency on ImageMagick or any other system library.

pub mod config;
pub mod contents;
pub mod density;
pub mod generate;
pub mod imaging;
pub mod include_list;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_helpers;
