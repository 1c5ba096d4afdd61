//! Path manipulation utilities

use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` components
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Keep leading '..' components, they cannot be resolved lexically
                if components.is_empty() {
                    components.push(component);
                } else {
                    components.pop();
                }
            }
            _ => {
                components.push(component);
            }
        }
    }

    components.iter().collect()
}

/// Resolve a template reference against the templates directory
///
/// An empty reference resolves to nothing, an absolute one is used as is and
/// a relative one is joined onto `templates_dir`.
#[must_use]
pub fn resolve_template_path(reference: &str, templates_dir: &Path) -> Option<PathBuf> {
    if reference.is_empty() {
        return None;
    }

    let path = Path::new(reference);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(templates_dir.join(path))
    }
}

/// Make `path` absolute by joining it onto `base` when relative
#[must_use]
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Express a relative path with forward slashes
#[must_use]
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
