use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Path of `path` relative to `root`.
///
/// # Errors
/// Returns error if `path` is not inside `root`.
pub fn get_relative_path(root: &Path, path: &Path) -> Result<PathBuf> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .context(format!(
            "Path {} is outside of {}",
            path.display(),
            root.display()
        ))
}
