//! Raw shape of a `config.toml` document
//!
//! Every key is optional so that absent keys can fall through to defaults or
//! to the inherited root settings.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level document
#[derive(Debug, Default, Deserialize)]
pub struct ConfigDocument {
    pub editor: Option<String>,
    pub pager: Option<String>,

    /// Settings of the root directory, written as top-level keys
    #[serde(flatten)]
    pub root: DirDocument,

    #[serde(default)]
    pub alias: BTreeMap<String, String>,

    /// `[dir.<name>]` tables
    #[serde(default)]
    pub dir: BTreeMap<String, DirDocument>,
}

/// Directory settings, shared by the root and `[dir.<name>]` tables
#[derive(Debug, Default, Deserialize)]
pub struct DirDocument {
    pub filename: Option<String>,
    pub extension: Option<String>,
    pub template: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "default-title")]
    pub default_title: Option<String>,
    #[serde(default)]
    pub id: IdDocument,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

/// `[id]` table
#[derive(Debug, Default, Deserialize)]
pub struct IdDocument {
    pub charset: Option<String>,
    pub length: Option<i64>,
    pub case: Option<String>,
}
