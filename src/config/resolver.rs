//! Resolution of a configuration document into a `Config`
//!
//! The root settings are built on top of the defaults, then every
//! `[dir.<name>]` table is resolved on top of a copy of the root settings.

use crate::config::document::{ConfigDocument, DirDocument, IdDocument};
use crate::config::id_options::{IdOptions, parse_case, parse_charset};
use crate::config::{Config, DirConfig};
use crate::error::ParseError;
use crate::utils::path::resolve_template_path;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Parse a configuration document
///
/// Relative template references are resolved against `templates_dir`.
///
/// # Errors
///
/// Returns a `ParseError` if the document is not valid UTF-8, is not valid
/// TOML, holds a value of the wrong type for a recognized key, or holds a
/// non-positive `id.length`.
pub fn parse_config(content: &[u8], templates_dir: &Path) -> Result<Config, ParseError> {
    let text = std::str::from_utf8(content)?;
    let document: ConfigDocument = toml::from_str(text)?;

    let mut root = DirConfig::default();
    overlay(&mut root, &document.root, templates_dir, "")?;

    let mut dirs = BTreeMap::new();
    for (name, entry) in &document.dir {
        let mut dir_config = root.clone();
        overlay(&mut dir_config, entry, templates_dir, &format!("dir.{name}."))?;
        debug!("Resolved configuration of directory '{name}'");
        dirs.insert(name.clone(), dir_config);
    }

    Ok(Config {
        dir_config: root,
        dirs,
        editor: document.editor,
        pager: document.pager,
        aliases: document.alias,
    })
}

/// Overwrite the fields of `config` explicitly set in `entry`
///
/// `key_prefix` is only used to name the offending key in errors.
fn overlay(
    config: &mut DirConfig,
    entry: &DirDocument,
    templates_dir: &Path,
    key_prefix: &str,
) -> Result<(), ParseError> {
    if let Some(filename) = &entry.filename {
        config.filename_template.clone_from(filename);
    }
    if let Some(extension) = &entry.extension {
        config.extension.clone_from(extension);
    }
    if let Some(template) = &entry.template {
        config.body_template_path = resolve_template_path(template, templates_dir);
    }
    if let Some(language) = &entry.language {
        config.lang.clone_from(language);
    }
    if let Some(title) = &entry.default_title {
        config.default_title.clone_from(title);
    }

    overlay_id_options(&mut config.id_options, &entry.id, key_prefix)?;

    config.extra.extend(
        entry
            .extra
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );

    Ok(())
}

fn overlay_id_options(
    options: &mut IdOptions,
    entry: &IdDocument,
    key_prefix: &str,
) -> Result<(), ParseError> {
    if let Some(charset) = &entry.charset {
        options.charset = parse_charset(charset);
    }
    if let Some(length) = entry.length {
        options.length = u32::try_from(length)
            .ok()
            .filter(|length| *length > 0)
            .ok_or_else(|| {
                ParseError::invalid_value(
                    format!("{key_prefix}id.length"),
                    format!("expected a positive integer, got {length}"),
                )
            })?;
    }
    if let Some(case) = &entry.case {
        options.case = parse_case(case);
    }
    Ok(())
}
