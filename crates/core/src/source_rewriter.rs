use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use glob::Pattern;
use tokio::fs::read_to_string;

use crate::{FileChange, MigrationError, MigrationParams, Occurrence, SourceKind};

/// A discovered file waiting to be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub kind: SourceKind,
}

/// Glob-selected set of files of one kind.
#[derive(Debug)]
pub struct SourceSet {
    kind: SourceKind,
    patterns: Vec<Pattern>,
    files: BTreeMap<PathBuf, SourceFile>,
}

impl SourceSet {
    /// # Errors
    /// Returns `InvalidPattern` if any glob does not compile.
    pub fn new(kind: SourceKind, patterns: &[String]) -> Result<Self, MigrationError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| MigrationError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            kind,
            patterns,
            files: BTreeMap::new(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Matches a path relative to the migration root, using `/` separators.
    #[must_use]
    pub fn matches(&self, relative_path: &Path) -> bool {
        let relative = relative_path.to_string_lossy().replace('\\', "/");
        self.patterns.iter().any(|pattern| pattern.matches(&relative))
    }

    /// Records `path` when it is a file matching one of the patterns. Returns whether it was added.
    pub fn visit(&mut self, path: &Path, relative_path: &Path) -> bool {
        if !path.is_file() || !self.matches(relative_path) || self.files.contains_key(path) {
            return false;
        }
        self.files.insert(
            path.to_path_buf(),
            SourceFile {
                path: path.to_path_buf(),
                relative_path: relative_path.to_path_buf(),
                kind: self.kind,
            },
        );
        true
    }

    pub fn files(&self) -> Vec<&SourceFile> {
        self.files.values().collect()
    }
}

/// Visitor over discovered files for one file shape.
///
/// `visit` is called for every file under the migration root; implementations
/// keep the ones they handle. `rewrite` is pure over the file content, and
/// `plan` reads every kept file and rewrites it without writing anything back.
#[async_trait]
pub trait SourceRewriter: std::fmt::Debug + Send + Sync {
    fn kind(&self) -> SourceKind;
    /// Globs a relative path must match to be kept by `visit`.
    fn patterns(&self) -> &[Pattern];
    fn sources(&self) -> Vec<&SourceFile>;
    /// # Errors
    /// Returns error if the file visitation fails.
    async fn visit(&mut self, path: &Path, relative_path: &Path) -> Result<()>;
    /// # Errors
    /// Returns error if the rewritten content cannot be spliced back together.
    fn rewrite(
        &self,
        content: &str,
        params: &MigrationParams,
    ) -> Result<(String, Vec<Occurrence>), MigrationError>;

    /// # Errors
    /// Returns error if reading or rewriting any collected file fails.
    async fn plan(&self, params: &MigrationParams) -> Result<Vec<FileChange>> {
        let reads = self.sources().into_iter().map(|source| async move {
            let content = read_to_string(&source.path)
                .await
                .context(format!("Failed to read {}", source.path.display()))?;
            let (updated, occurrences) = self
                .rewrite(&content, params)
                .context(format!("Failed to rewrite {}", source.path.display()))?;
            Ok::<_, anyhow::Error>(FileChange::new(
                source.path.clone(),
                source.relative_path.clone(),
                source.kind,
                occurrences,
                content,
                updated,
            ))
        });
        futures::future::join_all(reads)
            .await
            .into_iter()
            .collect()
    }
}
