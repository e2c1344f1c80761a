//! Run a resolved [`Plan`] end to end.
//!
//! ```text
//! Plan ──scaffold──▶ target dirs ──generate (per source)──▶ artifacts
//!                                        │
//!                                        └──▶ GenerateEvent sink
//! ```
//!
//! Sources are processed sequentially in plan order. A source that cannot be
//! processed (missing, unreadable) is reported through
//! [`GenerateEvent::SourceFailed`] and the run moves on; only a scaffolding
//! failure aborts the run.
//!
//! Resource outputs are named after the source stem, so `logo.png` and
//! `Logo.PNG` would write the same files. The first in plan order wins; the
//! later one fails with [`GenerateError::NameCollision`].

use crate::config::GeneratorConfig;
use crate::density::Resolution;
use crate::generate::app_icon::generate_app_icon;
use crate::generate::resources::generate_resources;
use crate::generate::{GenerateError, GenerateEvent, SourceReport};
use crate::imaging::ImageBackend;
use crate::manifest::{app_icon_dir, drawable_dir, mipmap_dir};
use crate::resolve::{Mode, Plan};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Counts over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Sources that produced a report (possibly with failed artifacts).
    pub sources_completed: usize,
    /// Sources skipped entirely.
    pub sources_failed: usize,
    pub artifacts_written: usize,
    pub artifacts_failed: usize,
    pub contents_written: usize,
    pub contents_failed: usize,
}

impl RunSummary {
    fn record(&mut self, report: &SourceReport) {
        self.sources_completed += 1;
        self.artifacts_written += report.written.len();
        self.artifacts_failed += report.failed.len();
        if report.contents_json.is_some() {
            self.contents_written += 1;
        }
        if report.contents_error.is_some() {
            self.contents_failed += 1;
        }
    }

    /// True when every source, artifact and `Contents.json` succeeded.
    pub fn is_clean(&self) -> bool {
        self.sources_failed == 0 && self.artifacts_failed == 0 && self.contents_failed == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} sources, {} files written",
            self.sources_completed,
            self.sources_completed + self.sources_failed,
            self.artifacts_written + self.contents_written
        )?;
        let failed = self.artifacts_failed + self.contents_failed;
        if failed > 0 {
            write!(f, ", {} failed", failed)?;
        }
        Ok(())
    }
}

/// Create the resource output directories. Idempotent.
///
/// Always creates the Apple directory and every Android drawable directory,
/// regardless of which buckets are enabled, so downstream projects see a
/// stable tree.
pub fn scaffold_resources(target_root: &Path, config: &GeneratorConfig) -> io::Result<()> {
    let layout = &config.layout;
    fs::create_dir_all(target_root.join(&layout.apple_dir))?;
    let android = target_root.join(&layout.android_dir);
    for density in Resolution::ANDROID {
        if let Some(dir) = drawable_dir(density) {
            fs::create_dir_all(android.join(dir))?;
        }
    }
    Ok(())
}

/// Create the app icon output directories. Idempotent.
pub fn scaffold_app_icon(target_root: &Path, config: &GeneratorConfig) -> io::Result<()> {
    let layout = &config.layout;
    fs::create_dir_all(target_root.join(app_icon_dir(layout)))?;
    let android = target_root.join(&layout.android_dir);
    for density in Resolution::ANDROID {
        fs::create_dir_all(android.join(mipmap_dir(density)))?;
    }
    Ok(())
}

/// Scaffold the target tree and run the plan's generator over every source.
pub fn run(
    backend: &impl ImageBackend,
    plan: &Plan,
    config: &GeneratorConfig,
    on_event: &mut impl FnMut(GenerateEvent),
) -> io::Result<RunSummary> {
    match plan.mode {
        Mode::Resources => scaffold_resources(&plan.target_root, config)?,
        Mode::AppIcon => scaffold_app_icon(&plan.target_root, config)?,
    }

    let mut summary = RunSummary::default();
    let mut claimed: HashMap<String, PathBuf> = HashMap::new();
    for source in &plan.sources {
        let result = match plan.mode {
            Mode::Resources => match claim_output_name(&mut claimed, source) {
                Ok(()) => generate_resources(backend, source, &plan.target_root, config, on_event),
                Err(error) => Err(error),
            },
            Mode::AppIcon => generate_app_icon(backend, source, &plan.target_root, config, on_event),
        };
        match result {
            Ok(report) => summary.record(&report),
            Err(error) => {
                summary.sources_failed += 1;
                on_event(source_failed(source, &error));
            }
        }
    }
    Ok(summary)
}

/// Reserve the case-folded stem of `source` for this run.
fn claim_output_name(
    claimed: &mut HashMap<String, PathBuf>,
    source: &Path,
) -> Result<(), GenerateError> {
    let key = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match claimed.get(&key) {
        Some(existing) => Err(GenerateError::NameCollision {
            path: source.to_path_buf(),
            existing: existing.clone(),
        }),
        None => {
            claimed.insert(key, source.to_path_buf());
            Ok(())
        }
    }
}

fn source_failed(source: &Path, error: &GenerateError) -> GenerateEvent {
    GenerateEvent::SourceFailed {
        source: PathBuf::from(source),
        error: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;
    use crate::resolve::resolve_plan;
    use tempfile::TempDir;

    fn sources(tmp: &TempDir, names: &[&str]) {
        for name in names {
            fs::write(tmp.path().join(name), b"png").unwrap();
        }
    }

    #[test]
    fn scaffold_resources_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let config = GeneratorConfig::default();
        scaffold_resources(tmp.path(), &config).unwrap();
        scaffold_resources(tmp.path(), &config).unwrap();

        for dir in [
            "iOS",
            "Android/drawable",
            "Android/drawable-hdpi",
            "Android/drawable-xhdpi",
            "Android/drawable-xxhdpi",
            "Android/drawable-xxxhdpi",
        ] {
            assert!(tmp.path().join(dir).is_dir(), "{dir} missing");
        }
        assert!(!tmp.path().join("Android/drawable-mdpi").exists());
    }

    #[test]
    fn scaffold_app_icon_creates_mipmaps() {
        let tmp = TempDir::new().unwrap();
        scaffold_app_icon(tmp.path(), &GeneratorConfig::default()).unwrap();
        assert!(tmp.path().join("iOS/AppIcon.appiconset").is_dir());
        for d in ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"] {
            assert!(tmp.path().join(format!("Android/mipmap-{d}")).is_dir());
        }
    }

    #[test]
    fn batch_of_three_writes_eight_artifacts_and_a_manifest_each() {
        let tmp = TempDir::new().unwrap();
        sources(&tmp, &["a.png", "b.png", "c.png"]);
        let plan = resolve_plan(Mode::Resources, None, None, tmp.path()).unwrap();
        let backend = MockBackend::with_dimensions(256, 256);

        let summary = run(&backend, &plan, &GeneratorConfig::default(), &mut |_| {}).unwrap();

        assert_eq!(summary.sources_completed, 3);
        assert_eq!(summary.artifacts_written, 24);
        assert_eq!(summary.contents_written, 3);
        assert!(summary.is_clean());
        for stem in ["a", "b", "c"] {
            assert!(
                tmp.path()
                    .join(format!("iOS/{stem}.imageset/Contents.json"))
                    .is_file()
            );
        }
    }

    #[test]
    fn missing_source_is_skipped_and_counted() {
        let tmp = TempDir::new().unwrap();
        sources(&tmp, &["a.png"]);
        let plan = Plan {
            mode: Mode::Resources,
            source_root: tmp.path().to_path_buf(),
            target_root: tmp.path().to_path_buf(),
            sources: vec![tmp.path().join("ghost.png"), tmp.path().join("a.png")],
        };
        let backend = MockBackend::with_dimensions(64, 64);
        let mut events = Vec::new();

        let summary = run(&backend, &plan, &GeneratorConfig::default(), &mut |e| {
            events.push(e)
        })
        .unwrap();

        assert_eq!(summary.sources_completed, 1);
        assert_eq!(summary.sources_failed, 1);
        assert_eq!(summary.artifacts_written, 8);
        assert!(!summary.is_clean());
        assert!(matches!(
            &events[0],
            GenerateEvent::SourceFailed { error, .. } if error.contains("ghost.png")
        ));
    }

    #[test]
    fn icon_mode_with_two_pngs_does_no_work() {
        let tmp = TempDir::new().unwrap();
        sources(&tmp, &["a.png", "b.png"]);
        assert!(resolve_plan(Mode::AppIcon, None, None, tmp.path()).is_err());
        assert!(!tmp.path().join("iOS").exists());
        assert!(!tmp.path().join("Android").exists());
    }

    #[test]
    fn icon_run_writes_31_icons_and_template() {
        let tmp = TempDir::new().unwrap();
        sources(&tmp, &["icon.png"]);
        let plan = resolve_plan(Mode::AppIcon, None, None, tmp.path()).unwrap();
        let backend = MockBackend::with_dimensions(1024, 1024);

        let summary = run(&backend, &plan, &GeneratorConfig::default(), &mut |_| {}).unwrap();
        assert_eq!(summary.artifacts_written, 31);
        assert_eq!(summary.contents_written, 1);
    }

    #[test]
    fn summary_display() {
        let summary = RunSummary {
            sources_completed: 2,
            sources_failed: 1,
            artifacts_written: 15,
            artifacts_failed: 1,
            contents_written: 2,
            contents_failed: 1,
        };
        assert_eq!(summary.to_string(), "2 of 3 sources, 17 files written, 2 failed");
    }

    #[test]
    fn stems_differing_only_in_case_are_not_overwritten() {
        let tmp = TempDir::new().unwrap();
        sources(&tmp, &["logo.png", "Logo.PNG", "other.png"]);
        let plan = Plan {
            mode: Mode::Resources,
            source_root: tmp.path().to_path_buf(),
            target_root: tmp.path().to_path_buf(),
            sources: vec![
                tmp.path().join("logo.png"),
                tmp.path().join("Logo.PNG"),
                tmp.path().join("other.png"),
            ],
        };
        let backend = MockBackend::with_dimensions(64, 64);
        let mut events = Vec::new();

        let summary = run(&backend, &plan, &GeneratorConfig::default(), &mut |e| {
            events.push(e)
        })
        .unwrap();

        assert_eq!(summary.sources_completed, 2);
        assert_eq!(summary.sources_failed, 1);
        assert_eq!(summary.artifacts_written, 16);
        let failures: Vec<&GenerateEvent> = events
            .iter()
            .filter(|e| matches!(e, GenerateEvent::SourceFailed { .. }))
            .collect();
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            failures[0],
            GenerateEvent::SourceFailed { source, error }
                if source.ends_with("Logo.PNG") && error.contains("logo.png")
        ));
    }

    #[test]
    fn unwritable_contents_json_still_counts_written_files() {
        let tmp = TempDir::new().unwrap();
        sources(&tmp, &["logo.png"]);
        fs::create_dir_all(tmp.path().join("iOS/logo.imageset/Contents.json")).unwrap();
        let plan = resolve_plan(Mode::Resources, None, None, tmp.path()).unwrap();
        let backend = MockBackend::with_dimensions(64, 64);

        let summary = run(&backend, &plan, &GeneratorConfig::default(), &mut |_| {}).unwrap();

        assert_eq!(summary.sources_completed, 1);
        assert_eq!(summary.sources_failed, 0);
        assert_eq!(summary.artifacts_written, 8);
        assert_eq!(summary.contents_failed, 1);
        assert!(!summary.is_clean());
        assert_eq!(summary.to_string(), "1 of 1 sources, 8 files written, 1 failed");
    }
}
