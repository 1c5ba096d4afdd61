//! Notebook discovery and configuration loading
//!
//! A notebook is any directory holding a `.slipbox` directory. Its
//! configuration lives in `.slipbox/config.toml` and relative template
//! references are resolved against `.slipbox/templates`.

use crate::config::{Config, parse_config};
use crate::error::SlipboxError;
use crate::system::System;
use crate::utils::path::{absolutize, to_slash_path};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the directory marking the root of a notebook
pub const NOTEBOOK_DIR: &str = ".slipbox";

/// A notebook located on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    root: PathBuf,
}

impl Notebook {
    /// Create a notebook rooted at `root`, without checking the filesystem
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Find the notebook containing `start`
    ///
    /// `start` and each of its ancestors are checked in turn for a
    /// `.slipbox` directory.
    ///
    /// # Errors
    ///
    /// Returns a `SlipboxError::Notebook` if no ancestor is a notebook, or a
    /// `SlipboxError::Filesystem` if the current directory is unavailable.
    pub fn locate(system: &dyn System, start: &Path) -> Result<Self, SlipboxError> {
        let start = absolute_path(system, start)?;

        let root = start
            .ancestors()
            .find(|dir| system.is_dir(&dir.join(NOTEBOOK_DIR)))
            .ok_or_else(|| {
                SlipboxError::notebook(format!(
                    "No notebook found in {} or any parent directory\n\
                    Create a {NOTEBOOK_DIR} directory to turn a directory into a notebook",
                    start.display()
                ))
            })?;

        debug!("Found notebook at {}", root.display());
        Ok(Self::new(root))
    }

    /// Root directory of the notebook
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the notebook configuration file
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join(NOTEBOOK_DIR).join("config.toml")
    }

    /// Directory relative template references are resolved against
    #[must_use]
    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(NOTEBOOK_DIR).join("templates")
    }

    /// Load and resolve the notebook configuration
    ///
    /// A notebook without a configuration file uses the defaults.
    ///
    /// # Errors
    ///
    /// Returns a `SlipboxError::Filesystem` if the file cannot be read, or a
    /// `SlipboxError::Configuration` if it cannot be parsed.
    pub fn load_config(&self, system: &dyn System) -> Result<Config, SlipboxError> {
        let path = self.config_path();

        let content = match system.read(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("No configuration file at {}, using defaults", path.display());
                Vec::new()
            }
            Err(err) => {
                return Err(SlipboxError::filesystem(format!(
                    "Failed to read configuration file {}: {err}",
                    path.display()
                )));
            }
        };

        parse_config(&content, &self.templates_dir()).map_err(|err| {
            SlipboxError::configuration(format!("{}: {err}", path.display()))
        })
    }

    /// Name of the directory containing `path`, relative to the notebook root
    ///
    /// Names use forward slashes, e.g. `journal/daily`. The root itself has
    /// no name.
    ///
    /// # Errors
    ///
    /// Returns a `SlipboxError::Notebook` if `path` is outside of the notebook.
    pub fn dir_name(&self, system: &dyn System, path: &Path) -> Result<Option<String>, SlipboxError> {
        let path = absolute_path(system, path)?;

        let relative = path.strip_prefix(&self.root).map_err(|_| {
            SlipboxError::notebook(format!(
                "{} is not inside the notebook at {}",
                path.display(),
                self.root.display()
            ))
        })?;

        let name = to_slash_path(relative);
        Ok((!name.is_empty()).then_some(name))
    }
}

fn absolute_path(system: &dyn System, path: &Path) -> Result<PathBuf, SlipboxError> {
    let current_dir = system.current_dir().map_err(|err| {
        SlipboxError::filesystem(format!("Failed to get the current directory: {err}"))
    })?;
    Ok(absolutize(path, &current_dir))
}
