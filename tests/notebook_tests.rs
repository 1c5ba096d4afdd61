//! Notebook discovery and configuration loading tests

use slipbox::cli::Args;
use slipbox::config::DirConfig;
use slipbox::error::SlipboxError;
use slipbox::notebook::Notebook;
use slipbox::system::MockSystem;
use std::path::{Path, PathBuf};

const CONFIG: &str = r#"
template = "default.md"

[extra]
author = "Ada"

[alias]
ls = "slipbox list $@"

[dir."journal/daily"]
filename = "{{date}}"
"#;

fn notebook_system() -> MockSystem {
    MockSystem::new()
        .with_file("/notes/.slipbox/config.toml", CONFIG.as_bytes())
        .unwrap()
        .with_dir("/notes/journal/daily")
        .unwrap()
        .with_current_dir("/notes/journal")
        .unwrap()
}

#[test]
fn test_locate_from_nested_dir() {
    let system = notebook_system();

    let notebook = Notebook::locate(&system, Path::new("daily")).unwrap();
    assert_eq!(notebook.root(), Path::new("/notes"));

    let notebook = Notebook::locate(&system, Path::new("/notes")).unwrap();
    assert_eq!(notebook.root(), Path::new("/notes"));
}

#[test]
fn test_locate_outside_notebook() {
    let system = MockSystem::new().with_dir("/elsewhere").unwrap();

    let err = Notebook::locate(&system, Path::new("/elsewhere")).unwrap_err();
    assert!(matches!(err, SlipboxError::Notebook { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_load_config_resolves_templates() {
    let system = notebook_system();
    let notebook = Notebook::locate(&system, Path::new(".")).unwrap();

    let config = notebook.load_config(&system).unwrap();
    assert_eq!(
        config.dir_config.body_template_path,
        Some(PathBuf::from("/notes/.slipbox/templates/default.md"))
    );
    assert_eq!(config.alias("ls"), Some("slipbox list $@"));
    assert_eq!(config.alias("rm"), None);

    let daily = config.dir_config(Some("journal/daily"));
    assert_eq!(daily.filename_template, "{{date}}");
    assert_eq!(daily.extra["author"], "Ada");
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let system = MockSystem::new().with_dir("/notes/.slipbox").unwrap();
    let notebook = Notebook::locate(&system, Path::new("/notes")).unwrap();

    let config = notebook.load_config(&system).unwrap();
    assert_eq!(config.dir_config, DirConfig::default());
    assert!(config.dirs.is_empty());
    assert!(config.aliases.is_empty());
}

#[test]
fn test_invalid_config_file() {
    let system = MockSystem::new()
        .with_file("/notes/.slipbox/config.toml", b"[id\nlength = 1")
        .unwrap();
    let notebook = Notebook::new("/notes");

    let err = notebook.load_config(&system).unwrap_err();
    assert!(matches!(err, SlipboxError::Configuration { .. }));
    assert!(err.to_string().contains("/notes/.slipbox/config.toml"));
}

#[test]
fn test_dir_name() {
    let system = notebook_system();
    let notebook = Notebook::new("/notes");

    assert_eq!(
        notebook.dir_name(&system, Path::new("daily")).unwrap().as_deref(),
        Some("journal/daily")
    );
    assert_eq!(notebook.dir_name(&system, Path::new("..")).unwrap(), None);

    let err = notebook.dir_name(&system, Path::new("/tmp")).unwrap_err();
    assert!(matches!(err, SlipboxError::Notebook { .. }));
}

#[test]
fn test_run_with_dir_path_and_overrides() {
    use clap::Parser as _;

    let system = notebook_system();
    let args = Args::parse_from([
        "slipbox",
        "--notebook-dir",
        "/notes",
        "--dir",
        "daily",
        "--extra",
        "author=Grace",
    ]);

    let output = slipbox::run(&args, &system).unwrap();
    assert!(output.contains("dir = \"journal/daily\""));
    assert!(output.contains("filename = \"{{date}}\""));
    assert!(output.contains("extra.author = \"Grace\""));
}

#[test]
fn test_run_lists_aliases() {
    use clap::Parser as _;

    let system = notebook_system();
    let args = Args::parse_from(["slipbox", "--notebook-dir", "/notes", "--aliases"]);

    let output = slipbox::run(&args, &system).unwrap();
    assert_eq!(output, "ls  slipbox list $@");
}
