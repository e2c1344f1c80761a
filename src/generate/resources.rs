//! Resource fan-out: one source PNG into eight density variants.
//!
//! The source is treated as `xxxhdpi` artwork. Each manifest entry converts
//! the source dimensions to its target bucket and writes the result under the
//! target root:
//!
//! ```text
//! target/
//! ├── iOS/logo.imageset/
//! │   ├── Contents.json
//! │   ├── logo.png          (pixel)
//! │   ├── logo@2x.png       (pixel2)
//! │   └── logo@3x.png       (pixel3)
//! └── Android/
//!     ├── drawable/logo.png
//!     ├── drawable-hdpi/logo.png
//!     ├── drawable-xhdpi/logo.png
//!     ├── drawable-xxhdpi/logo.png
//!     └── drawable-xxxhdpi/logo.png
//! ```
//!
//! In the flat Apple layout the three Apple files land directly in `iOS/` and
//! no `Contents.json` is written.

use super::{
    ArtifactKind, GenerateError, GenerateEvent, PlannedArtifact, SourceReport, execute_plan,
    require_source, write_contents,
};
use crate::config::{AppleLayout, GeneratorConfig};
use crate::contents::ImageSetContents;
use crate::density::convert_dimensions;
use crate::imaging::{Dimensions, ImageBackend};
use crate::manifest::{SourceName, apple_dir_for, select_entries};
use std::path::Path;

/// Split a source path into the stem and extension used for naming.
pub fn source_name(source: &Path) -> Result<SourceName, GenerateError> {
    let invalid = || GenerateError::InvalidFileName(source.to_path_buf());
    let stem = source.file_stem().and_then(|s| s.to_str()).ok_or_else(invalid)?;
    let extension = match source.extension() {
        Some(ext) => ext.to_str().ok_or_else(invalid)?,
        None => "",
    };
    Ok(SourceName::new(stem, extension))
}

/// Plan the fan-out for one source of the given dimensions.
///
/// Only the buckets enabled in `config.resources.buckets` are planned, in
/// manifest order.
pub fn plan_resources(
    name: &SourceName,
    dimensions: Dimensions,
    config: &GeneratorConfig,
) -> Vec<PlannedArtifact> {
    select_entries(&config.resources.buckets)
        .into_iter()
        .map(|entry| {
            let (width, height) =
                convert_dimensions((dimensions.width, dimensions.height), entry.from, entry.to);
            PlannedArtifact {
                kind: ArtifactKind::Resource(entry.to),
                relative_path: entry.relative_path(&config.layout, name),
                width,
                height,
            }
        })
        .collect()
}

/// Generate every enabled density variant of `source` under `target_root`.
///
/// Fails only when the source is missing, badly named or unreadable. Per
/// artifact failures are collected in the report. In the asset-catalog layout
/// a `Contents.json` listing the Apple variants actually written is placed in
/// the image set directory; if that write fails the report says so and keeps
/// the written variants.
pub fn generate_resources(
    backend: &impl ImageBackend,
    source: &Path,
    target_root: &Path,
    config: &GeneratorConfig,
    on_event: &mut impl FnMut(GenerateEvent),
) -> Result<SourceReport, GenerateError> {
    require_source(source)?;
    let name = source_name(source)?;
    let dimensions = backend.identify(source)?;
    on_event(GenerateEvent::SourceStarted {
        source: source.to_path_buf(),
        width: dimensions.width,
        height: dimensions.height,
    });

    let plan = plan_resources(&name, dimensions, config);
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
        let apple_files: Vec<(String, &'static str)> = report
            .written
            .iter()
            .filter_map(|artifact| match artifact.kind {
                ArtifactKind::Resource(bucket) => bucket
                    .apple_scale_tag()
                    .map(|scale| (artifact.file_name(), scale)),
                ArtifactKind::AppleIcon(_) | ArtifactKind::AndroidIcon(_) => None,
            })
            .collect();

        if !apple_files.is_empty() {
            let contents = ImageSetContents::universal(
                apple_files.iter().map(|(file, scale)| (file.as_str(), *scale)),
            );
            write_contents(
                target_root,
                &apple_dir_for(&config.layout, &name),
                &mut report,
                on_event,
                |dir| contents.write(dir),
            );
        }
    }

    Ok(report)
}
