//! Artifact generation from a single source image.
//!
//! Both generators follow the same two-step shape:
//!
//! 1. **Plan**: a pure function turns the source name, its dimensions and the
//!    config into a list of [`PlannedArtifact`]s (relative path + pixel size).
//! 2. **Execute**: [`execute_plan`] asks the [`ImageBackend`] to resize the
//!    source into every planned path, one artifact at a time.
//!
//! A failed artifact is recorded in the [`SourceReport`] and reported through
//! the event callback; the remaining artifacts are still attempted. The same
//! holds for the `Contents.json` sidecar. Only a missing or unreadable source
//! aborts a generator.
//!
//! | Generator | Planner | Output |
//! |---|---|---|
//! | [`resources::generate_resources`] | [`resources::plan_resources`] | 3 Apple + 5 Android density variants, `Contents.json` |
//! | [`app_icon::generate_app_icon`] | [`app_icon::plan_app_icon`] | 26 Apple icons, 5 Android launcher icons, `Contents.json` |

pub mod app_icon;
pub mod resources;

use crate::contents::CONTENTS_FILE_NAME;
use crate::density::Resolution;
use crate::imaging::{BackendError, Dimensions, ImageBackend, ResizeFilter, ResizeParams};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source image not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("Source file name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Output names collide with {existing} (file names differ only in case)")]
    NameCollision { path: PathBuf, existing: PathBuf },
}

/// What a planned artifact is, independent of where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Density variant of a resource image.
    Resource(Resolution),
    /// Square Apple app icon of the given pixel size.
    AppleIcon(u32),
    /// Android launcher icon for a density bucket.
    AndroidIcon(Resolution),
}

impl ArtifactKind {
    /// Short label used in progress output (`pixel2`, `Icon180`, `mipmap-hdpi`).
    pub fn label(&self) -> String {
        match self {
            ArtifactKind::Resource(bucket) => bucket.tag().to_string(),
            ArtifactKind::AppleIcon(size) => format!("Icon{size}"),
            ArtifactKind::AndroidIcon(density) => crate::manifest::mipmap_dir(*density),
        }
    }
}

/// One output file: where it goes and how big it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedArtifact {
    pub kind: ArtifactKind,
    /// Path relative to the target root.
    pub relative_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl PlannedArtifact {
    /// File name component of the relative path.
    pub fn file_name(&self) -> String {
        self.relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// An artifact the backend could not produce.
#[derive(Debug)]
pub struct ArtifactFailure {
    pub artifact: PlannedArtifact,
    pub error: BackendError,
}

/// Outcome of running one generator over one source image.
#[derive(Debug)]
pub struct SourceReport {
    pub source: PathBuf,
    pub dimensions: Dimensions,
    pub written: Vec<PlannedArtifact>,
    pub failed: Vec<ArtifactFailure>,
    /// `Contents.json` written for this source, relative to the target root.
    pub contents_json: Option<PathBuf>,
    /// Why the `Contents.json` could not be written.
    pub contents_error: Option<String>,
}

impl SourceReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty() && self.contents_error.is_none()
    }
}

/// Progress notifications, emitted in generation order.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// A source was identified and is about to be fanned out.
    SourceStarted {
        source: PathBuf,
        width: u32,
        height: u32,
    },
    /// App icon sources smaller than the largest icon are upscaled.
    UndersizedIconSource {
        width: u32,
        height: u32,
        minimum: u32,
    },
    ArtifactWritten(PlannedArtifact),
    ArtifactFailed {
        artifact: PlannedArtifact,
        error: String,
    },
    /// Relative path of a written `Contents.json`.
    ContentsWritten(PathBuf),
    ContentsFailed { path: PathBuf, error: String },
    /// The source could not be processed at all; nothing was written for it.
    SourceFailed { source: PathBuf, error: String },
}

/// Fail with [`GenerateError::SourceNotFound`] unless `source` is a file.
pub(crate) fn require_source(source: &Path) -> Result<(), GenerateError> {
    if source.is_file() {
        Ok(())
    } else {
        Err(GenerateError::SourceNotFound(source.to_path_buf()))
    }
}

/// Resize `source` into every planned artifact under `target_root`.
///
/// Parent directories are created on demand. Each artifact succeeds or fails
/// on its own; the returned report has an empty `contents_json`.
pub fn execute_plan(
    backend: &impl ImageBackend,
    source: &Path,
    dimensions: Dimensions,
    target_root: &Path,
    plan: Vec<PlannedArtifact>,
    filter: ResizeFilter,
    on_event: &mut impl FnMut(GenerateEvent),
) -> SourceReport {
    let mut report = SourceReport {
        source: source.to_path_buf(),
        dimensions,
        written: Vec::new(),
        failed: Vec::new(),
        contents_json: None,
        contents_error: None,
    };

    for artifact in plan {
        let output = target_root.join(&artifact.relative_path);
        let result = ensure_parent(&output).and_then(|()| {
            backend.resize(&ResizeParams {
                source: source.to_path_buf(),
                output,
                width: artifact.width,
                height: artifact.height,
                filter,
            })
        });

        match result {
            Ok(()) => {
                on_event(GenerateEvent::ArtifactWritten(artifact.clone()));
                report.written.push(artifact);
            }
            Err(error) => {
                on_event(GenerateEvent::ArtifactFailed {
                    artifact: artifact.clone(),
                    error: error.to_string(),
                });
                report.failed.push(ArtifactFailure { artifact, error });
            }
        }
    }

    report
}

/// Write a `Contents.json` into `relative_dir` with `write` and record the
/// outcome in `report`.
///
/// A failed write is reported and kept in the report; artifacts already
/// written stay counted.
pub(crate) fn write_contents(
    target_root: &Path,
    relative_dir: &Path,
    report: &mut SourceReport,
    on_event: &mut impl FnMut(GenerateEvent),
    write: impl FnOnce(&Path) -> io::Result<PathBuf>,
) {
    let dir = target_root.join(relative_dir);
    match fs::create_dir_all(&dir).and_then(|()| write(&dir)) {
        Ok(written) => {
            let relative = match written.strip_prefix(target_root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => written.clone(),
            };
            on_event(GenerateEvent::ContentsWritten(relative.clone()));
            report.contents_json = Some(relative);
        }
        Err(error) => {
            on_event(GenerateEvent::ContentsFailed {
                path: relative_dir.join(CONTENTS_FILE_NAME),
                error: error.to_string(),
            });
            report.contents_error = Some(error.to_string());
        }
    }
}

fn ensure_parent(path: &Path) -> Result<(), BackendError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;
    use tempfile::TempDir;

    fn artifact(path: &str, size: u32) -> PlannedArtifact {
        PlannedArtifact {
            kind: ArtifactKind::AppleIcon(size),
            relative_path: PathBuf::from(path),
            width: size,
            height: size,
        }
    }

    #[test]
    fn labels() {
        assert_eq!(ArtifactKind::Resource(Resolution::Pixel2).label(), "pixel2");
        assert_eq!(ArtifactKind::AppleIcon(180).label(), "Icon180");
        assert_eq!(
            ArtifactKind::AndroidIcon(Resolution::Hdpi).label(),
            "mipmap-hdpi"
        );
    }

    #[test]
    fn execute_creates_parents_and_reports_in_order() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::new();
        let mut events = Vec::new();

        let report = execute_plan(
            &backend,
            Path::new("/src/logo.png"),
            Dimensions { width: 64, height: 64 },
            tmp.path(),
            vec![artifact("a/b/one.png", 10), artifact("c/two.png", 20)],
            ResizeFilter::default(),
            &mut |e| events.push(e),
        );

        assert!(tmp.path().join("a/b").is_dir());
        assert!(tmp.path().join("c").is_dir());
        assert!(report.is_complete());
        assert_eq!(report.written.len(), 2);
        assert_eq!(
            events,
            vec![
                GenerateEvent::ArtifactWritten(artifact("a/b/one.png", 10)),
                GenerateEvent::ArtifactWritten(artifact("c/two.png", 20)),
            ]
        );
        let sizes: Vec<(u32, u32)> = backend.resizes().iter().map(|r| (r.1, r.2)).collect();
        assert_eq!(sizes, vec![(10, 10), (20, 20)]);
    }

    #[test]
    fn failed_artifact_does_not_stop_the_rest() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::new().failing_on("one.png");
        let mut events = Vec::new();

        let report = execute_plan(
            &backend,
            Path::new("/src/logo.png"),
            Dimensions { width: 64, height: 64 },
            tmp.path(),
            vec![artifact("one.png", 10), artifact("two.png", 20)],
            ResizeFilter::default(),
            &mut |e| events.push(e),
        );

        assert!(!report.is_complete());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].artifact.file_name(), "one.png");
        assert_eq!(report.written.len(), 1);
        assert!(matches!(&events[0], GenerateEvent::ArtifactFailed { .. }));
        assert!(matches!(&events[1], GenerateEvent::ArtifactWritten(_)));
    }

    #[test]
    fn contents_failure_is_recorded_not_raised() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::new();
        let mut events = Vec::new();
        let mut report = execute_plan(
            &backend,
            Path::new("/src/logo.png"),
            Dimensions { width: 64, height: 64 },
            tmp.path(),
            vec![artifact("set/one.png", 10)],
            ResizeFilter::default(),
            &mut |e| events.push(e),
        );

        write_contents(tmp.path(), Path::new("set"), &mut report, &mut |e| events.push(e), |_| {
            Err(io::Error::other("disk full"))
        });

        assert_eq!(report.written.len(), 1);
        assert!(report.contents_json.is_none());
        assert_eq!(report.contents_error.as_deref(), Some("disk full"));
        assert!(!report.is_complete());
        assert_eq!(
            events[1],
            GenerateEvent::ContentsFailed {
                path: PathBuf::from("set/Contents.json"),
                error: "disk full".to_string(),
            }
        );
    }

    #[test]
    fn contents_success_is_relative_to_target() {
        let tmp = TempDir::new().unwrap();
        let mut report = execute_plan(
            &MockBackend::new(),
            Path::new("/src/logo.png"),
            Dimensions { width: 64, height: 64 },
            tmp.path(),
            Vec::new(),
            ResizeFilter::default(),
            &mut |_| {},
        );

        write_contents(tmp.path(), Path::new("a/b"), &mut report, &mut |_| {}, |dir| {
            let path = dir.join(CONTENTS_FILE_NAME);
            fs::write(&path, "{}")?;
            Ok(path)
        });

        assert_eq!(report.contents_json, Some(PathBuf::from("a/b/Contents.json")));
        assert!(report.contents_error.is_none());
    }

    #[test]
    fn require_source_rejects_missing_and_directories() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            require_source(&tmp.path().join("missing.png")),
            Err(GenerateError::SourceNotFound(_))
        ));
        assert!(require_source(tmp.path()).is_err());
    }
}
