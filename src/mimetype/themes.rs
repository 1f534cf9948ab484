//! Theme enumeration: installed theme apps plus legacy theme directories.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::icons::scan_theme_icon_dir;

/// An installed theme app: identifier plus install path.
///
/// Descriptors are passed in explicitly so the enumerator has no dependency
/// on the platform's app registry - tests (and other callers) construct the
/// list themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeDescriptor {
    pub id: String,
    pub path: PathBuf,
}

/// Load theme-app descriptors from an optional manifest file.
///
/// The manifest is a JSON array of `{"id": ..., "path": ...}` objects.
/// Relative paths are resolved against `root`. A missing manifest means no
/// theme apps are installed.
pub fn load_theme_descriptors(manifest: &Path, root: &Path) -> Result<Vec<ThemeDescriptor>> {
    if !manifest.is_file() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(manifest)
        .with_context(|| format!("failed to read {}", manifest.display()))?;
    let mut descriptors: Vec<ThemeDescriptor> = serde_json::from_str(&content)
        .with_context(|| format!("invalid theme app manifest {}", manifest.display()))?;
    for descriptor in &mut descriptors {
        if descriptor.path.is_relative() {
            descriptor.path = root.join(&descriptor.path);
        }
    }
    Ok(descriptors)
}

/// Collect the icon set of every theme, keyed by theme identifier.
///
/// Theme apps come from the descriptor list; legacy themes are the immediate
/// subdirectories of `legacy_root`. Plain files under the legacy root are
/// skipped. Keys are sorted, so the result does not depend on directory
/// enumeration order. On an id collision the legacy theme wins.
///
/// The legacy root is part of the install layout; if it is missing the
/// command aborts.
pub fn list_themes(
    app_themes: &[ThemeDescriptor],
    legacy_root: &Path,
) -> Result<BTreeMap<String, Vec<String>>> {
    let mut themes = BTreeMap::new();

    for descriptor in app_themes {
        debug!(theme = %descriptor.id, "scanning theme app icons");
        let icons = scan_theme_icon_dir(&descriptor.path)?;
        themes.insert(descriptor.id.clone(), icons);
    }

    let entries = std::fs::read_dir(legacy_root)
        .with_context(|| format!("failed to read legacy themes root {}", legacy_root.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read entry in {}", legacy_root.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", entry.path().display()))?;
        if !file_type.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        debug!(theme = %name, "scanning legacy theme icons");
        let icons = scan_theme_icon_dir(&entry.path())?;
        themes.insert(name, icons);
    }

    Ok(themes)
}
