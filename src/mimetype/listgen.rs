//! Rendering and writing of the generated mimetype list script.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::config::ServerPaths;

use super::aliases::AliasSource;
use super::icons::scan_icon_dir;
use super::themes::{list_themes, ThemeDescriptor};

/// Pretty-print with four-space indentation, the format the front end asset
/// has always shipped with.
fn to_pretty_json(value: &impl Serialize) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("failed to serialize mimetype list block")?;
    Ok(String::from_utf8(buf)?)
}

/// Render the full `mimetypelist.js` content.
///
/// Field order is fixed: `aliases`, `files`, `themes`. The embedded JSON
/// blocks keep their own indentation; continuation lines are not re-indented
/// under the field name. Forward slashes in mimetypes are never
/// backslash-escaped, so `text/plain` round-trips as written.
pub fn render_mimetype_list(
    aliases: &Map<String, Value>,
    files: &[String],
    themes: &BTreeMap<String, Vec<String>>,
) -> Result<String> {
    let aliases_json = to_pretty_json(aliases)?;
    let files_json = to_pretty_json(&files)?;
    let themes_json = to_pretty_json(themes)?;

    Ok(format!(
        "/**\n\
         * This file is automatically generated\n\
         * DO NOT EDIT MANUALLY!\n\
         *\n\
         * You can update the list of MimeType Aliases in config/mimetypealiases.json\n\
         * The list of files is fetched from core/img/filetypes\n\
         * To regenerate this file run ./nimbus maintenance mimetype update-js\n\
         */\n\
         Nimbus.MimeTypeList={{\n\
         \taliases: {aliases_json},\n\
         \tfiles: {files_json},\n\
         \tthemes: {themes_json}\n\
         }};"
    ))
}

/// Regenerate `core/js/mimetypelist.js` from the current on-disk state.
///
/// Linear pipeline: scan the base icon directory, enumerate themes, fetch
/// the alias mapping, render, then overwrite the output file in one write.
/// The content is built fully in memory, so a failed run never leaves a
/// partial file behind.
pub fn update_mimetype_list(
    paths: &ServerPaths,
    aliases: &dyn AliasSource,
    app_themes: &[ThemeDescriptor],
) -> Result<()> {
    let files = scan_icon_dir(&paths.filetype_icons_dir())?;
    let themes = list_themes(app_themes, &paths.legacy_themes_root())?;
    let aliases = aliases.all_aliases()?;

    info!(
        files = files.len(),
        themes = themes.len(),
        aliases = aliases.len(),
        "rendering mimetype list"
    );

    let content = render_mimetype_list(&aliases, &files, &themes)?;
    let out_path = paths.mimetype_list_path();
    std::fs::write(&out_path, content)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alias_map(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from(*v)))
            .collect()
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let json = to_pretty_json(&alias_map(&[("text/plain", "txt")])).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
            "text/plain": "txt"
        }
        "#);
    }

    #[test]
    fn render_has_fixed_field_order_and_header() {
        let aliases = alias_map(&[("text/plain", "txt")]);
        let files = vec!["txt".to_string()];
        let themes = BTreeMap::new();

        let rendered = render_mimetype_list(&aliases, &files, &themes).unwrap();
        assert_eq!(
            rendered,
            "/**\n\
             * This file is automatically generated\n\
             * DO NOT EDIT MANUALLY!\n\
             *\n\
             * You can update the list of MimeType Aliases in config/mimetypealiases.json\n\
             * The list of files is fetched from core/img/filetypes\n\
             * To regenerate this file run ./nimbus maintenance mimetype update-js\n\
             */\n\
             Nimbus.MimeTypeList={\n\
             \taliases: {\n    \"text/plain\": \"txt\"\n},\n\
             \tfiles: [\n    \"txt\"\n],\n\
             \tthemes: {}\n\
             };"
        );
    }

    #[test]
    fn forward_slashes_are_not_escaped() {
        let aliases = alias_map(&[("text/plain", "txt")]);
        let rendered = render_mimetype_list(&aliases, &[], &BTreeMap::new()).unwrap();
        assert!(rendered.contains("\"text/plain\""));
        assert!(!rendered.contains("\\/"));
    }

    #[test]
    fn render_is_deterministic() {
        let aliases = alias_map(&[("image/png", "image"), ("text/plain", "txt")]);
        let files = vec!["image".to_string(), "txt".to_string()];
        let mut themes = BTreeMap::new();
        themes.insert("midnight".to_string(), vec!["folder".to_string()]);

        let first = render_mimetype_list(&aliases, &files, &themes).unwrap();
        let second = render_mimetype_list(&aliases, &files, &themes).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn aliases_keep_source_order() {
        let aliases = alias_map(&[("z/last", "z"), ("a/first", "a")]);
        let rendered = render_mimetype_list(&aliases, &[], &BTreeMap::new()).unwrap();
        let z = rendered.find("z/last").unwrap();
        let a = rendered.find("a/first").unwrap();
        assert!(z < a, "alias order must follow the source, not key order");
    }
}
