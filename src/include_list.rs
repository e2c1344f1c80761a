//! Android resource include list for Xamarin `.csproj` files.
//!
//! Walks `<project>/Resources` and renders one `AndroidResource` item per
//! file, ready to paste into the project file:
//!
//! ```text
//! <ItemGroup>
//! <AndroidResource Include="Resources\drawable\logo.png" />
//! <AndroidResource Include="Resources\drawable-hdpi\logo.png" />
//! </ItemGroup>
//! ```
//!
//! Paths are relative to the project root and always use `\` separators,
//! since MSBuild item specs are Windows paths. Entries are sorted
//! alphabetically, one path component at a time and ignoring case, so a
//! directory's files come before those of a longer-named sibling
//! (`drawable\` before `drawable-hdpi\`). Names equal up to case fall back to
//! byte order, so the output is identical on every platform.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Directory scanned inside the project root.
pub const RESOURCES_DIR: &str = "Resources";
/// File written into the target directory.
pub const INCLUDE_LIST_FILE_NAME: &str = "ResourcesIncludeList.txt";

#[derive(Error, Debug)]
pub enum IncludeError {
    #[error("Resource directory not found on project: {0}")]
    ResourcesDirNotFound(PathBuf),
    #[error("Failed to walk resources: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Every file under `<project_root>/Resources`, as sorted project-relative
/// paths with `\` separators.
pub fn collect_resources(project_root: &Path) -> Result<Vec<String>, IncludeError> {
    let resources = project_root.join(RESOURCES_DIR);
    if !resources.is_dir() {
        return Err(IncludeError::ResourcesDirNotFound(project_root.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(&resources) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(project_root)
            .unwrap_or(entry.path());
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        entries.push(parts.join("\\"));
    }
    entries.sort_by(|a, b| compare_entries(a, b));
    Ok(entries)
}

fn compare_entries(a: &str, b: &str) -> Ordering {
    let folded = |entry: &str| {
        entry
            .split('\\')
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
    };
    folded(a).cmp(&folded(b)).then_with(|| a.cmp(b))
}

/// Render the `<ItemGroup>` block. No trailing newline after the closing tag.
pub fn render_include_list(entries: &[String]) -> String {
    let mut out = String::from("<ItemGroup>\n");
    for entry in entries {
        out.push_str(&format!(
            "<AndroidResource Include=\"{}\" />\n",
            escape_attribute(entry)
        ));
    }
    out.push_str("</ItemGroup>");
    out
}

/// Collect, render and write `ResourcesIncludeList.txt` into `target_root`.
///
/// Returns the written path and the entries it lists.
pub fn write_include_list(
    project_root: &Path,
    target_root: &Path,
) -> Result<(PathBuf, Vec<String>), IncludeError> {
    let entries = collect_resources(project_root)?;
    fs::create_dir_all(target_root)?;
    let path = target_root.join(INCLUDE_LIST_FILE_NAME);
    fs::write(&path, render_include_list(&entries))?;
    Ok((path, entries))
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}
