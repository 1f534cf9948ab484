//! File-type icon directory scanning.

use std::path::Path;

use anyhow::{Context, Result};

/// Strip the final extension: everything from the last `.` to the end of the
/// name. Names without a `.` are returned unchanged.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// List the unique icon base names in a directory, sorted ascending.
///
/// Only regular files contribute; subdirectories are ignored. An icon that
/// ships in several formats (`folder.png`, `folder.svg`) appears once.
///
/// The directory must exist. This is used for the base icon directory, which
/// is a required part of every install - its absence is a broken install and
/// aborts the command.
pub fn scan_icon_dir(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read icon directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", entry.path().display()))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        names.push(strip_extension(&name).to_owned());
    }

    names.sort();
    names.dedup();
    Ok(names)
}

/// Icon names contributed by one theme directory.
///
/// Themes are not required to override icons, so a theme without a
/// `core/img/filetypes` directory contributes an empty set rather than an
/// error.
pub fn scan_theme_icon_dir(theme_dir: &Path) -> Result<Vec<String>> {
    let icon_dir = theme_dir.join("core/img/filetypes");
    if !icon_dir.is_dir() {
        return Ok(Vec::new());
    }
    scan_icon_dir(&icon_dir)
}
