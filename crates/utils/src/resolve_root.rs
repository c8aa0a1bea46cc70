use std::path::{Path, PathBuf};

use anyhow::Result;
use gix::discover;

/// Picks the directory a migration runs over.
///
/// An explicit path wins; otherwise the work tree of the git repository
/// containing `current_dir`; otherwise `current_dir` itself.
pub fn resolve_root(explicit: Option<&Path>, current_dir: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let root = if path.is_absolute() {
            path.to_path_buf()
        } else {
            current_dir.join(path)
        };
        if !root.is_dir() {
            anyhow::bail!("Migration root is not a directory - {}", root.display());
        }
        return Ok(root);
    }
    Ok(find_git_work_dir(current_dir).unwrap_or_else(|| current_dir.to_path_buf()))
}

/// Work tree of the git repository containing `current_dir`, if any.
pub fn find_git_work_dir(current_dir: &Path) -> Option<PathBuf> {
    let repo = discover(current_dir).ok()?;
    let work_dir = repo.workdir()?.to_path_buf();
    let work_dir = if work_dir.is_absolute() {
        work_dir
    } else {
        current_dir.join(work_dir)
    };
    Some(work_dir.canonicalize().unwrap_or(work_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn init_git_repo(path: &Path) {
        std::process::Command::new("git")
            .arg("init")
            .current_dir(path)
            .output()
            .unwrap();
    }

    #[test]
    fn test_resolve_root_explicit_relative() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("mod")).unwrap();

        let root = resolve_root(Some(Path::new("mod")), temp_dir.path()).unwrap();
        assert_eq!(root, temp_dir.path().join("mod"));

        temp_dir.close().unwrap();
    }

    #[test]
    fn test_resolve_root_explicit_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = resolve_root(Some(Path::new("missing")), temp_dir.path());
        assert!(result.is_err());
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_resolve_root_without_git_repo_uses_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = resolve_root(None, temp_dir.path()).unwrap();
        // a temp dir may itself sit inside a repository on some machines
        assert!(temp_dir.path().starts_with(&root) || root == temp_dir.path());
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_resolve_root_nested_subdirectory_uses_work_tree() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path().canonicalize().unwrap();
        init_git_repo(&temp_path);
        let nested_dir = temp_path.join("forge").join("src");
        fs::create_dir_all(&nested_dir).unwrap();

        let root = resolve_root(None, &nested_dir).unwrap();
        assert_eq!(root, temp_path);

        temp_dir.close().unwrap();
    }
}
