//! Configuration management module
//!
//! Handles `config.toml` parsing, per-directory inheritance and runtime overrides

pub mod document;
pub mod id_options;
pub mod resolver;

pub use id_options::{Case, Charset, IdOptions, parse_case, parse_charset};
pub use resolver::parse_config;

use crate::error::ParseError;
use crate::system::System;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Resolved configuration of a notebook
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Config {
    /// Settings of the notebook root, inherited by every directory
    #[serde(rename = "root")]
    pub dir_config: DirConfig,

    /// Fully resolved settings of each `[dir.<name>]` table
    pub dirs: BTreeMap<String, DirConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pager: Option<String>,

    pub aliases: BTreeMap<String, String>,
}

impl Config {
    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the document cannot be resolved
    pub fn from_toml(content: &str, templates_dir: &Path) -> Result<Self, ParseError> {
        parse_config(content.as_bytes(), templates_dir)
    }

    /// Settings of the named directory, or the root settings when the
    /// directory has no table of its own
    #[must_use]
    pub fn dir_config(&self, name: Option<&str>) -> &DirConfig {
        name.and_then(|name| self.dirs.get(name))
            .unwrap_or(&self.dir_config)
    }

    /// Copy of the named directory's settings with `overrides` applied
    #[must_use]
    pub fn resolve_dir_config(&self, name: Option<&str>, overrides: &ConfigOverrides) -> DirConfig {
        self.dir_config(name).with_overrides(overrides)
    }

    /// Command an alias expands to
    #[must_use]
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Editor to use, from `SLIPBOX_EDITOR`, the config, `VISUAL` then `EDITOR`
    #[must_use]
    pub fn editor(&self, system: &dyn System) -> Option<String> {
        first_non_empty(system, "SLIPBOX_EDITOR", self.editor.as_deref(), &["VISUAL", "EDITOR"])
    }

    /// Pager to use, from `SLIPBOX_PAGER`, the config then `PAGER`
    #[must_use]
    pub fn pager(&self, system: &dyn System) -> Option<String> {
        first_non_empty(system, "SLIPBOX_PAGER", self.pager.as_deref(), &["PAGER"])
    }
}

fn first_non_empty(
    system: &dyn System,
    override_var: &str,
    configured: Option<&str>,
    fallback_vars: &[&str],
) -> Option<String> {
    let from_env = |key: &str| system.env_var(key).ok().filter(|value| !value.is_empty());

    from_env(override_var)
        .or_else(|| {
            configured
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        })
        .or_else(|| fallback_vars.iter().find_map(|key| from_env(*key)))
}

/// Settings governing note creation in one directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirConfig {
    /// Template used to build the filename of a new note, without extension
    #[serde(rename = "filename")]
    pub filename_template: String,

    pub extension: String,

    /// Template used to render the body of a new note
    #[serde(rename = "template", skip_serializing_if = "Option::is_none")]
    pub body_template_path: Option<PathBuf>,

    #[serde(rename = "id")]
    pub id_options: IdOptions,

    #[serde(rename = "default-title")]
    pub default_title: String,

    #[serde(rename = "language")]
    pub lang: String,

    /// User variables passed to templates
    pub extra: BTreeMap<String, String>,
}

impl Default for DirConfig {
    fn default() -> Self {
        Self {
            filename_template: "{{id}}".to_owned(),
            extension: "md".to_owned(),
            body_template_path: None,
            id_options: IdOptions::default(),
            default_title: "Untitled".to_owned(),
            lang: "en".to_owned(),
            extra: BTreeMap::new(),
        }
    }
}

impl DirConfig {
    /// Apply runtime overrides in place
    ///
    /// Fields absent from `overrides` are left untouched. Extra variables are
    /// merged, with the overrides winning on conflicting keys.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(filename) = &overrides.filename_template {
            self.filename_template.clone_from(filename);
        }
        if let Some(path) = &overrides.body_template_path {
            self.body_template_path = Some(path.clone());
        }
        for (key, value) in &overrides.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }

    /// Copy of these settings with runtime overrides applied
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut config = self.clone();
        config.apply_overrides(overrides);
        config
    }
}

/// Runtime overrides of a `DirConfig`, typically from command-line flags
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigOverrides {
    pub filename_template: Option<String>,
    pub body_template_path: Option<PathBuf>,
    pub extra: BTreeMap<String, String>,
}

impl ConfigOverrides {
    /// Whether applying these overrides would change nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filename_template.is_none() && self.body_template_path.is_none() && self.extra.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    fn sample() -> DirConfig {
        DirConfig {
            filename_template: "filename".to_owned(),
            body_template_path: Some(PathBuf::from("body.tpl")),
            id_options: IdOptions {
                length: 4,
                charset: Charset::Letters,
                case: Case::Upper,
            },
            extra: BTreeMap::from([
                ("hello".to_owned(), "world".to_owned()),
                ("salut".to_owned(), "le monde".to_owned()),
            ]),
            ..DirConfig::default()
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut clone = original.clone();
        assert_eq!(clone, original);

        clone.filename_template = "modified".to_owned();
        clone.extension = "txt".to_owned();
        clone.body_template_path = Some(PathBuf::from("modified"));
        clone.id_options.length = 41;
        clone.id_options.charset = Charset::Numbers;
        clone.id_options.case = Case::Lower;
        clone.lang = "de".to_owned();
        clone.default_title = "Ohne Titel".to_owned();
        clone.extra.insert("test".to_owned(), "modified".to_owned());
        clone.extra.remove("hello");

        assert_eq!(original, sample());
    }

    #[test]
    fn test_empty_overrides_are_a_noop() {
        let mut config = sample();
        let overrides = ConfigOverrides::default();
        assert!(overrides.is_empty());

        config.apply_overrides(&overrides);
        assert_eq!(config, sample());
    }

    #[test]
    fn test_overrides_replace_scalars_and_merge_extra() {
        let mut config = sample();
        config.apply_overrides(&ConfigOverrides {
            body_template_path: Some(PathBuf::from("overridden-template")),
            extra: BTreeMap::from([
                ("hello".to_owned(), "overridden".to_owned()),
                ("additional".to_owned(), "value".to_owned()),
            ]),
            ..ConfigOverrides::default()
        });

        assert_eq!(
            config,
            DirConfig {
                body_template_path: Some(PathBuf::from("overridden-template")),
                extra: BTreeMap::from([
                    ("hello".to_owned(), "overridden".to_owned()),
                    ("salut".to_owned(), "le monde".to_owned()),
                    ("additional".to_owned(), "value".to_owned()),
                ]),
                ..sample()
            }
        );
    }

    #[test]
    fn test_with_overrides_leaves_source_untouched() {
        let config = sample();
        let overridden = config.with_overrides(&ConfigOverrides {
            filename_template: Some("{{slug title}}".to_owned()),
            ..ConfigOverrides::default()
        });

        assert_eq!(overridden.filename_template, "{{slug title}}");
        assert_eq!(config, sample());
    }

    #[test]
    fn test_dir_config_falls_back_to_root() {
        let mut config = Config::default();
        config.dirs.insert("log".to_owned(), sample());

        assert_eq!(config.dir_config(Some("log")), &sample());
        assert_eq!(config.dir_config(Some("unknown")), &DirConfig::default());
        assert_eq!(config.dir_config(None), &DirConfig::default());
    }

    #[test]
    fn test_editor_precedence() {
        let config = Config {
            editor: Some("nano".to_owned()),
            ..Config::default()
        };

        let system = MockSystem::new().with_env("EDITOR", "vi").unwrap();
        assert_eq!(config.editor(&system).as_deref(), Some("nano"));

        let system = system.with_env("SLIPBOX_EDITOR", "code").unwrap();
        assert_eq!(config.editor(&system).as_deref(), Some("code"));

        let system = MockSystem::new()
            .with_env("VISUAL", "")
            .unwrap()
            .with_env("EDITOR", "vi")
            .unwrap();
        assert_eq!(Config::default().editor(&system).as_deref(), Some("vi"));
        assert_eq!(Config::default().editor(&MockSystem::new()), None);
    }

    #[test]
    fn test_pager_precedence() {
        let system = MockSystem::new().with_env("PAGER", "more").unwrap();
        assert_eq!(Config::default().pager(&system).as_deref(), Some("more"));

        let config = Config {
            pager: Some("less -R".to_owned()),
            ..Config::default()
        };
        assert_eq!(config.pager(&system).as_deref(), Some("less -R"));
    }
}
