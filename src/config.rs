//! Fixed filesystem locations under the platform install root.

use std::path::{Path, PathBuf};

/// Resolves the well-known paths the maintenance commands touch, relative to
/// the platform installation root.
///
/// Pure path arithmetic - no I/O happens here, so a `ServerPaths` can point
/// at a directory that does not exist yet (tests build their install trees
/// inside a tempdir).
#[derive(Debug, Clone)]
pub struct ServerPaths {
    root: PathBuf,
}

impl ServerPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The installation root itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base (non-themed) file-type icon directory.
    pub fn filetype_icons_dir(&self) -> PathBuf {
        self.root.join("core/img/filetypes")
    }

    /// Root of the legacy flat theme directories.
    pub fn legacy_themes_root(&self) -> PathBuf {
        self.root.join("themes")
    }

    /// Generated script consumed by the web front end.
    pub fn mimetype_list_path(&self) -> PathBuf {
        self.root.join("core/js/mimetypelist.js")
    }

    /// Mimetype alias table shipped with the server.
    pub fn alias_dist_path(&self) -> PathBuf {
        self.root.join("resources/config/mimetypealiases.dist.json")
    }

    /// Admin-managed alias overrides. Optional.
    pub fn alias_custom_path(&self) -> PathBuf {
        self.root.join("config/mimetypealiases.json")
    }

    /// Manifest listing installed theme apps. Optional.
    pub fn theme_apps_path(&self) -> PathBuf {
        self.root.join("config/themeapps.json")
    }
}
