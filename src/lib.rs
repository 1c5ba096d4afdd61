//! `Slipbox` - per-directory note settings for a plain-text notebook
//!
//! This library resolves the `config.toml` of a notebook into one set of
//! settings per directory: root settings built on the defaults, directory
//! tables inheriting from the root, and runtime overrides applied on top.

pub mod cli;
pub mod config;
pub mod error;
pub mod notebook;
pub mod system;
pub mod utils;

use anyhow::{Context as _, Result};
use cli::{Args, render_aliases, render_dir_config};
use notebook::Notebook;
use std::path::Path;
use system::System;
use tracing::debug;

/// Main entry point for the slipbox library
///
/// Returns the text to print on the standard output.
pub fn run(args: &Args, system: &dyn System) -> Result<String> {
    let notebook = Notebook::locate(system, &args.notebook_dir)?;
    let config = notebook.load_config(system)?;

    if args.aliases {
        return render_aliases(&config.aliases, args.format);
    }

    let dir_name = match args.dir.as_deref() {
        Some(name) if config.dirs.contains_key(name) => Some(name.to_owned()),
        Some(path) => notebook.dir_name(system, Path::new(path))?,
        None => None,
    };
    debug!("Showing settings of directory {dir_name:?}");

    let current_dir = system
        .current_dir()
        .context("Failed to get the current directory")?;
    let overrides = args.overrides(&current_dir)?;
    let dir_config = config.resolve_dir_config(dir_name.as_deref(), &overrides);

    render_dir_config(dir_name.as_deref(), &dir_config, args.format)
}
