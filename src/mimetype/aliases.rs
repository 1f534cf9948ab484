//! Mimetype alias configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Source of the mimetype-to-display-alias mapping.
///
/// The generator treats the mapping as opaque: keys and values pass through
/// into the generated script verbatim, in the order the source returns them.
/// Values may be a plain string or an array of strings.
pub trait AliasSource {
    fn all_aliases(&self) -> Result<Map<String, Value>>;
}

/// Alias mapping backed by the server's JSON configuration: the shipped
/// `mimetypealiases.dist.json` overlaid with the admin-managed
/// `config/mimetypealiases.json`.
#[derive(Debug, Clone)]
pub struct ConfigAliasSource {
    dist_path: PathBuf,
    custom_path: PathBuf,
}

impl ConfigAliasSource {
    pub fn new(dist_path: impl Into<PathBuf>, custom_path: impl Into<PathBuf>) -> Self {
        Self {
            dist_path: dist_path.into(),
            custom_path: custom_path.into(),
        }
    }
}

impl AliasSource for ConfigAliasSource {
    fn all_aliases(&self) -> Result<Map<String, Value>> {
        // The shipped table is part of the install; its absence is fatal.
        let mut aliases = read_alias_file(&self.dist_path)?;

        // Admin overrides are optional and win over shipped entries.
        if self.custom_path.is_file() {
            for (mimetype, alias) in read_alias_file(&self.custom_path)? {
                aliases.insert(mimetype, alias);
            }
        }

        Ok(aliases)
    }
}

fn read_alias_file(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read alias file {}", path.display()))?;
    let aliases: Map<String, Value> = serde_json::from_str(&content)
        .with_context(|| format!("invalid alias file {}", path.display()))?;

    // Keys starting with an underscore are comment entries in the shipped
    // file and never reach the front end.
    Ok(aliases
        .into_iter()
        .filter(|(mimetype, _)| !mimetype.starts_with('_'))
        .collect())
}
