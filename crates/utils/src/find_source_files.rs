use std::path::{Path, PathBuf};

use anyhow::Result;
use glob::Pattern;
use ignore::WalkBuilder;
use mcmigrate_core::{Config, MigrationError, SourceRewriter};

use crate::get_relative_path;

/// Walks `root` and offers every file to every rewriter.
///
/// Honours `.gitignore` files and skips hidden entries. Files whose relative
/// path matches one of `config.ignore` are never offered. Returns how many
/// files were walked.
///
/// # Errors
/// Returns error if an ignore pattern is invalid, the walk fails, or a rewriter
/// rejects a visit.
pub async fn find_source_files(
    root: &Path,
    config: &Config,
    rewriters: &mut [Box<dyn SourceRewriter>],
) -> Result<usize> {
    let ignore_patterns = config
        .ignore
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| MigrationError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let files = walk_files(root)?;
    let mut walked = 0;
    for path in files {
        let relative_path = get_relative_path(root, &path)?;
        let relative = relative_path.to_string_lossy().replace('\\', "/");
        if ignore_patterns.iter().any(|pattern| pattern.matches(&relative)) {
            tracing::debug!(path = %relative, "ignored by config");
            continue;
        }
        walked += 1;
        for rewriter in rewriters.iter_mut() {
            rewriter.visit(&path, &relative_path).await?;
        }
    }
    tracing::debug!(walked, root = %root.display(), "discovered files");
    Ok(walked)
}

fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).require_git(false).build() {
        let entry = entry?;
        if entry.file_type().is_some_and(|file_type| file_type.is_file()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mcmigrate_core::{
        MigrationParams, Occurrence, SourceFile, SourceKind, SourceSet,
    };
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug)]
    struct CollectingRewriter {
        sources: SourceSet,
    }

    impl CollectingRewriter {
        fn new(pattern: &str) -> Self {
            Self {
                sources: SourceSet::new(SourceKind::BuildScript, &[pattern.to_string()]).unwrap(),
            }
        }
    }

    #[async_trait]
    impl SourceRewriter for CollectingRewriter {
        fn kind(&self) -> SourceKind {
            self.sources.kind()
        }

        fn patterns(&self) -> &[Pattern] {
            self.sources.patterns()
        }

        fn sources(&self) -> Vec<&SourceFile> {
            self.sources.files()
        }

        async fn visit(&mut self, path: &Path, relative_path: &Path) -> Result<()> {
            self.sources.visit(path, relative_path);
            Ok(())
        }

        fn rewrite(
            &self,
            content: &str,
            _params: &MigrationParams,
        ) -> Result<(String, Vec<Occurrence>), MigrationError> {
            Ok((content.to_string(), vec![]))
        }
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn relative_sources(rewriter: &dyn SourceRewriter) -> Vec<String> {
        rewriter
            .sources()
            .iter()
            .map(|s| s.relative_path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[tokio::test]
    async fn test_find_source_files_matches_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "build.gradle", "");
        write(root, "forge/build.gradle", "");
        write(root, "fabric/build.gradle.kts", "");
        write(root, "gradle.properties", "");

        let mut rewriters: Vec<Box<dyn SourceRewriter>> =
            vec![Box::new(CollectingRewriter::new("**/build.gradle"))];
        let walked = find_source_files(root, &Config::default(), &mut rewriters)
            .await
            .unwrap();

        assert_eq!(walked, 4);
        assert_eq!(
            relative_sources(rewriters[0].as_ref()),
            vec!["build.gradle", "forge/build.gradle"]
        );

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_find_source_files_applies_config_ignore() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "build.gradle", "");
        write(root, "run/build.gradle", "");

        let config = Config {
            ignore: vec!["run/**".to_string()],
            ..Config::default()
        };
        let mut rewriters: Vec<Box<dyn SourceRewriter>> =
            vec![Box::new(CollectingRewriter::new("**/build.gradle"))];
        find_source_files(root, &config, &mut rewriters).await.unwrap();

        assert_eq!(relative_sources(rewriters[0].as_ref()), vec!["build.gradle"]);

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_find_source_files_honours_gitignore_and_hidden() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, ".gitignore", "build/\n");
        write(root, "build/build.gradle", "");
        write(root, ".gradle/build.gradle", "");
        write(root, "build.gradle", "");

        let mut rewriters: Vec<Box<dyn SourceRewriter>> =
            vec![Box::new(CollectingRewriter::new("**/build.gradle"))];
        find_source_files(root, &Config::default(), &mut rewriters)
            .await
            .unwrap();

        assert_eq!(relative_sources(rewriters[0].as_ref()), vec!["build.gradle"]);

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_find_source_files_invalid_ignore_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            ignore: vec!["[".to_string()],
            ..Config::default()
        };
        let mut rewriters: Vec<Box<dyn SourceRewriter>> = vec![];
        let result = find_source_files(temp_dir.path(), &config, &mut rewriters).await;
        assert!(result.is_err());
        temp_dir.close().unwrap();
    }
}
