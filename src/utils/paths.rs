//! Source-tree traversal helpers: hidden-path detection and directory
//! listing. Stateless; every call re-reads the filesystem.

use std::path::{Component, Path, PathBuf};

use crate::error::AppError;

/// True if any segment of the path starts with a `.`, including `..`
/// parent-dir segments. A bare `./` prefix is dropped during component
/// parsing and does not count.
///
/// Pure string check, no filesystem access.
pub(crate) fn is_hidden(path: &Path) -> bool {
    path.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        Component::ParentDir => true,
        _ => false,
    })
}

/// All visible directories in `folder` matching a glob pattern (use a `**`
/// segment for recursive search), lexicographically sorted and deduplicated.
///
/// Files and broken symlinks are skipped, as is anything hidden relative to
/// `folder`. A non-existent folder yields an empty list; pattern errors and
/// per-entry filesystem errors propagate.
pub(crate) fn lsdirs(folder: &Path, pattern: &str) -> Result<Vec<PathBuf>, AppError> {
    // The folder is a literal path, not a pattern: escape its glob
    // metacharacters so a base like `sub[01]` matches itself
    let full_pattern = PathBuf::from(glob::Pattern::escape(&folder.to_string_lossy())).join(pattern);
    let entries =
        glob::glob(&full_pattern.to_string_lossy()).map_err(|source| AppError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry?;
        if !path.is_dir() {
            continue;
        }
        let relative = path.strip_prefix(folder).unwrap_or(&path);
        if is_hidden(relative) {
            continue;
        }
        dirs.push(path);
    }
    dirs.sort();
    dirs.dedup();
    Ok(dirs)
}
