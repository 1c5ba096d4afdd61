//! Command-line argument definitions

use crate::config::ConfigOverrides;
use crate::error::SlipboxError;
use crate::utils::path::absolutize;
use clap::{Parser, ValueEnum};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Command-line arguments for slipbox
#[derive(Parser, Debug, Clone)]
#[command(name = "slipbox")]
#[command(about = "Show the resolved note settings of a slipbox notebook directory")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Directory of the notebook, or any directory inside it
    #[arg(
        long,
        value_name = "PATH",
        env = "SLIPBOX_NOTEBOOK_DIR",
        default_value = "."
    )]
    pub notebook_dir: PathBuf,

    /// Directory whose settings are shown, as a configured name or a path
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Override the filename template
    #[arg(long, value_name = "TEMPLATE")]
    pub filename: Option<String>,

    /// Override the body template, relative to the current directory
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Extra template variables in KEY=VALUE format (can be specified multiple times)
    #[arg(long = "extra", value_name = "KEY=VALUE")]
    pub extra: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List the command aliases instead of the directory settings
    #[arg(long)]
    pub aliases: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Rendering of the command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    /// Build the runtime overrides requested on the command line
    ///
    /// A relative `--template` is resolved against `current_dir`.
    ///
    /// # Errors
    ///
    /// Returns a `SlipboxError::Configuration` if an `--extra` value is not
    /// in KEY=VALUE format.
    pub fn overrides(&self, current_dir: &Path) -> Result<ConfigOverrides, SlipboxError> {
        Ok(ConfigOverrides {
            filename_template: self.filename.clone(),
            body_template_path: self
                .template
                .as_ref()
                .map(|path| absolutize(path, current_dir)),
            extra: parse_extra_args(&self.extra)?,
        })
    }
}

/// Parse `--extra` arguments, later values winning on duplicate keys
fn parse_extra_args(extra_args: &[String]) -> Result<BTreeMap<String, String>, SlipboxError> {
    extra_args.iter().map(|arg| parse_key_value(arg)).collect()
}

/// Parse KEY=VALUE string
fn parse_key_value(arg: &str) -> Result<(String, String), SlipboxError> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(SlipboxError::configuration(format!(
            "Invalid extra variable '{arg}'. Expected KEY=VALUE"
        ))),
    }
}
