use std::path::{Component, Path};

/// Ensure a directory exists, creating it (and missing ancestors) with `DIR_MODE` if necessary
pub fn ensure_dir_exists(path: &Path) -> std::io::Result<()> {
    if !path.is_dir() {
        create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(target_family = "unix")]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(vendorfs_constants::DIR_MODE)
        .create(path)
}

#[cfg(not(target_family = "unix"))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

/// Ensure the parent of `path` exists
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir_exists(parent),
        _ => Ok(()),
    }
}

/// Checks that an import path stays inside the directory it is joined onto.
///
/// Returns the reason the path is rejected, if any.
pub fn import_path_violation(import_path: &str) -> Option<&'static str> {
    if import_path.is_empty() {
        return Some("empty path");
    }

    let path = Path::new(import_path);
    if path.has_root() {
        return Some("path is absolute");
    }

    path.components().find_map(|component| match component {
        Component::Normal(_) | Component::CurDir => None,
        Component::ParentDir => Some("path escapes the vendor directory"),
        Component::RootDir | Component::Prefix(_) => Some("path is absolute"),
    })
}
