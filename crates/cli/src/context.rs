use crate::rewriters::get_rewriters;
use anyhow::Result;
use futures::future::join_all;
use mcmigrate_core::{Config, FileChange, MigrationParams, SourceRewriter};
use mcmigrate_utils::{find_source_files, get_mcmigrate_config, resolve_root};
use std::path::{Path, PathBuf};

pub struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
    pub rewriters: Vec<Box<dyn SourceRewriter>>,
}

impl CommandContext {
    /// Resolves the migration root, loads its config and discovers every candidate file.
    ///
    /// # Errors
    /// Returns error if the root cannot be resolved, the config is invalid or discovery fails.
    pub async fn new(path: Option<&Path>) -> Result<Self> {
        let current_dir = Self::current_dir()?;
        let root = resolve_root(path, &current_dir)?;
        let config = get_mcmigrate_config(&root).await?;
        let mut rewriters = get_rewriters(&config)?;
        let found = find_source_files(&root, &config, &mut rewriters).await?;
        tracing::debug!(root = %root.display(), found, "discovered candidate files");

        Ok(Self {
            root,
            config,
            rewriters,
        })
    }

    /// Computes the pending change for every discovered file, ordered by relative path.
    ///
    /// # Errors
    /// Returns error if any file cannot be read or rewritten.
    pub async fn plan(&self, params: &MigrationParams) -> Result<Vec<FileChange>> {
        let mut changes = join_all(self.rewriters.iter().map(|rewriter| rewriter.plan(params)))
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();
        changes.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        Ok(changes)
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }
}
