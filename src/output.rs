//! CLI output formatting for both tools.
//!
//! # Output Format
//!
//! ## moregen
//!
//! ```text
//! Source dir: /work/art
//! Generating resources for 2 images
//! logo.png (1024x1024)
//!     --> iOS/logo.imageset/logo.png (261x261)
//!     --> iOS/logo.imageset/logo@2x.png (522x522)
//!     ...
//!     --> Android/drawable-xxxhdpi/logo.png (1024x1024)
//!     --> iOS/logo.imageset/Contents.json
//! badge.png (96x64)
//!     ...
//! Done: 2 of 2 sources, 18 files written
//! ```
//!
//! Failures are reported inline, indented under their source:
//!
//! ```text
//!     FAILED iOS/logo.imageset/logo@3x.png: Processing failed: ...
//! ```
//!
//! ## resinc
//!
//! ```text
//! Source dir: /work/App.Android/Resources
//!     Resources\drawable\logo.png
//!     Resources\drawable-hdpi\logo.png
//! Wrote 2 entries to /work/App.Android/ResourcesIncludeList.txt
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::GenerateEvent;
use crate::pipeline::RunSummary;
use crate::resolve::{Mode, Plan};
use std::path::Path;

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// moregen
// ============================================================================

/// Header printed once a plan is resolved.
pub fn format_plan(plan: &Plan) -> Vec<String> {
    let mut lines = vec![format!("Source dir: {}", plan.source_root.display())];
    if plan.target_root != plan.source_root {
        lines.push(format!("Target dir: {}", plan.target_root.display()));
    }
    match plan.mode {
        Mode::AppIcon => {
            let name = plan
                .sources
                .first()
                .map(|s| display_name(s))
                .unwrap_or_default();
            lines.push(format!("Generating app icon for image {}", name));
        }
        Mode::Resources => {
            let count = plan.sources.len();
            let noun = if count == 1 { "image" } else { "images" };
            lines.push(format!("Generating resources for {} {}", count, noun));
        }
    }
    lines
}

pub fn print_plan(plan: &Plan) {
    for line in format_plan(plan) {
        println!("{}", line);
    }
}

/// Format a single generation progress event as display lines.
///
/// Sources are top-level lines; artifacts are indented beneath them with
/// their path relative to the target root.
pub fn format_generate_event(event: &GenerateEvent) -> Vec<String> {
    match event {
        GenerateEvent::SourceStarted {
            source,
            width,
            height,
        } => vec![format!("{} ({}x{})", display_name(source), width, height)],
        GenerateEvent::UndersizedIconSource {
            width,
            height,
            minimum,
        } => vec![format!(
            "    warning: source is {}x{}, icons are sharpest from at least {}x{}",
            width, height, minimum, minimum
        )],
        GenerateEvent::ArtifactWritten(artifact) => vec![format!(
            "    --> {} ({}x{})",
            artifact.relative_path.display(),
            artifact.width,
            artifact.height
        )],
        GenerateEvent::ArtifactFailed { artifact, error } => vec![format!(
            "    FAILED {}: {}",
            artifact.relative_path.display(),
            error
        )],
        GenerateEvent::ContentsWritten(path) => vec![format!("    --> {}", path.display())],
        GenerateEvent::ContentsFailed { path, error } => {
            vec![format!("    FAILED {}: {}", path.display(), error)]
        }
        GenerateEvent::SourceFailed { source, error } => {
            vec![format!("{}: {}", display_name(source), error)]
        }
    }
}

/// Print an event; failures go to stderr.
pub fn print_generate_event(event: &GenerateEvent) {
    let failure = matches!(
        event,
        GenerateEvent::ArtifactFailed { .. }
            | GenerateEvent::ContentsFailed { .. }
            | GenerateEvent::SourceFailed { .. }
    );
    for line in format_generate_event(event) {
        if failure {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    vec![format!("Done: {}", summary)]
}

pub fn print_summary(summary: &RunSummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// resinc
// ============================================================================

/// Format the include-list run: scanned directory, entries, written file.
pub fn format_include_list_output(
    resources_dir: &Path,
    written: &Path,
    entries: &[String],
) -> Vec<String> {
    let mut lines = vec![format!("Source dir: {}", resources_dir.display())];
    lines.extend(entries.iter().map(|e| format!("    {}", e)));
    let noun = if entries.len() == 1 { "entry" } else { "entries" };
    lines.push(format!(
        "Wrote {} {} to {}",
        entries.len(),
        noun,
        written.display()
    ));
    lines
}

pub fn print_include_list_output(resources_dir: &Path, written: &Path, entries: &[String]) {
    for line in format_include_list_output(resources_dir, written, entries) {
        println!("{}", line);
    }
}
