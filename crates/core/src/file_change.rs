use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::fs::write;

use crate::{Occurrence, SourceKind};

/// Planned result of rewriting one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChange {
    path: PathBuf,
    relative_path: PathBuf,
    kind: SourceKind,
    occurrences: Vec<Occurrence>,
    #[serde(skip)]
    original: String,
    #[serde(skip)]
    updated: String,
}

impl FileChange {
    #[must_use]
    pub fn new(
        path: PathBuf,
        relative_path: PathBuf,
        kind: SourceKind,
        occurrences: Vec<Occurrence>,
        original: String,
        updated: String,
    ) -> Self {
        Self {
            path,
            relative_path,
            kind,
            occurrences,
            original,
            updated,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    #[must_use]
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    #[must_use]
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn replacements(&self) -> impl Iterator<Item = &Occurrence> {
        self.occurrences.iter().filter(|o| o.is_replaced())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Occurrence> {
        self.occurrences.iter().filter(|o| !o.is_replaced())
    }

    #[must_use]
    pub fn updated(&self) -> &str {
        &self.updated
    }

    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.original != self.updated
    }

    /// Writes the updated content back to disk. Unchanged files are not touched.
    ///
    /// # Errors
    /// Returns error if writing the file fails.
    pub async fn apply(&self) -> Result<()> {
        if !self.is_changed() {
            return Ok(());
        }
        write(&self.path, &self.updated)
            .await
            .context(format!("Failed to write {}", self.path.display()))?;
        tracing::info!(path = %self.relative_path.display(), "rewrote file");
        Ok(())
    }
}
