//! Rendering of the command output

use crate::cli::OutputFormat;
use crate::config::DirConfig;
use anyhow::{Context as _, Result};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Render the settings of a directory
///
/// `dir` is the directory name, `None` for the notebook root.
pub fn render_dir_config(dir: Option<&str>, config: &DirConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "dir": dir,
            "config": config,
        }))
        .context("Failed to serialize directory settings to JSON"),
        OutputFormat::Text => {
            let mut lines = vec![
                format!("dir = {:?}", dir.unwrap_or(".")),
                format!("filename = {:?}", config.filename_template),
                format!("extension = {:?}", config.extension),
            ];
            if let Some(path) = &config.body_template_path {
                lines.push(format!("template = {:?}", path.display().to_string()));
            }
            lines.push(format!("language = {:?}", config.lang));
            lines.push(format!("default-title = {:?}", config.default_title));
            lines.push(format!("id.charset = {:?}", config.id_options.charset.name()));
            lines.push(format!("id.length = {}", config.id_options.length));
            lines.push(format!("id.case = {:?}", config.id_options.case.name()));
            for (key, value) in &config.extra {
                lines.push(format!("extra.{key} = {value:?}"));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Render the command aliases
pub fn render_aliases(aliases: &BTreeMap<String, String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(aliases)
            .context("Failed to serialize aliases to JSON"),
        OutputFormat::Text => {
            let width = aliases.keys().map(String::len).max().unwrap_or(0);
            let mut output = String::new();
            for (name, command) in aliases {
                writeln!(output, "{name:width$}  {command}")
                    .context("Failed to render aliases")?;
            }
            Ok(output.trim_end().to_owned())
        }
    }
}
