//! Turn command-line arguments into a concrete work plan.
//!
//! Resolution rules:
//!
//! | Arguments | Source root | Sources |
//! |---|---|---|
//! | none | current directory | every `*.png` in it |
//! | directory | that directory | every `*.png` in it |
//! | file | the file's directory | the file |
//!
//! The target root defaults to the source root. PNG discovery is
//! non-recursive, matches the extension case-insensitively and sorts by file
//! name, so batch output order is stable across platforms.
//!
//! App icon mode needs exactly one source: either a file argument, or a
//! directory holding a single PNG.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(
        "Cannot generate app icon files: no source file was given and {dir} contains {candidates} PNG files (exactly one is required)"
    )]
    NoSourceResolved { dir: PathBuf, candidates: usize },
    #[error("No PNG files in the source directory {0}")]
    NoPngFiles(PathBuf),
    #[error("Source directory not found: {0}")]
    SourceDirNotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Density fan-out of every source.
    Resources,
    /// App icon set from a single source.
    AppIcon,
}

/// Fully resolved unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub mode: Mode,
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    /// Absolute source paths, in processing order. A single explicit source
    /// is listed even if it does not exist; generation reports it.
    pub sources: Vec<PathBuf>,
}

/// Resolve the positional arguments against `cwd`.
pub fn resolve_plan(
    mode: Mode,
    source: Option<&Path>,
    target: Option<&Path>,
    cwd: &Path,
) -> Result<Plan, ResolveError> {
    let source = source.map(|p| absolutize(p, cwd));

    let (source_root, explicit) = match source {
        None => (cwd.to_path_buf(), None),
        Some(path) if path.is_dir() => (path, None),
        Some(path) => {
            let parent = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            (parent, Some(path))
        }
    };

    if !source_root.is_dir() {
        return Err(ResolveError::SourceDirNotFound(source_root));
    }

    let target_root = match target {
        Some(t) => absolutize(t, cwd),
        None => source_root.clone(),
    };

    let sources = match (explicit, mode) {
        (Some(file), _) => vec![file],
        (None, Mode::Resources) => {
            let pngs = list_pngs(&source_root)?;
            if pngs.is_empty() {
                return Err(ResolveError::NoPngFiles(source_root));
            }
            pngs
        }
        (None, Mode::AppIcon) => {
            let pngs = list_pngs(&source_root)?;
            if pngs.len() != 1 {
                return Err(ResolveError::NoSourceResolved {
                    dir: source_root,
                    candidates: pngs.len(),
                });
            }
            pngs
        }
    };

    Ok(Plan {
        mode,
        source_root,
        target_root,
        sources,
    })
}

/// PNG files directly inside `dir`, sorted by file name.
pub fn list_pngs(dir: &Path) -> Result<Vec<PathBuf>, ResolveError> {
    let mut pngs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_png(&path) {
            pngs.push(path);
        }
    }
    pngs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(pngs)
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
