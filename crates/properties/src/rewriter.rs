use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use glob::Pattern;
use mcmigrate_core::{
    MigrationError, MigrationParams, Occurrence, OccurrenceKind, SourceFile, SourceKind,
    SourceRewriter, SourceSet, TextEdit, apply_edits, line_number,
};

use crate::{entry_rewriter::rewrite_entry, scanner::scan_entries};

/// Rewrites version references in `gradle.properties` files.
#[derive(Debug)]
pub struct GradlePropertiesRewriter {
    sources: SourceSet,
}

impl GradlePropertiesRewriter {
    /// # Errors
    /// Returns `InvalidPattern` if any glob does not compile.
    pub fn new(patterns: &[String]) -> Result<Self, MigrationError> {
        Ok(Self {
            sources: SourceSet::new(SourceKind::Properties, patterns)?,
        })
    }
}

/// Rewrites the value of every entry containing the current version.
///
/// # Errors
/// Returns error if the edits do not splice cleanly.
pub fn rewrite_properties(
    content: &str,
    params: &MigrationParams,
) -> Result<(String, Vec<Occurrence>), MigrationError> {
    let mut edits = Vec::new();
    let mut occurrences = Vec::new();

    for entry in scan_entries(content) {
        let Some(updated) = rewrite_entry(&entry, params.current(), params.target()) else {
            continue;
        };
        let line = line_number(content, entry.value_span().start);
        tracing::debug!(line, key = entry.key(), value = updated.value(), "rewriting property");
        edits.push(TextEdit::new(entry.value_span(), entry.value(), updated.value()));
        occurrences.push(Occurrence::replaced(
            line,
            OccurrenceKind::Property {
                key: entry.key().to_string(),
            },
            entry.value(),
            updated.value(),
        ));
    }

    Ok((apply_edits(content, &edits)?, occurrences))
}

#[async_trait]
impl SourceRewriter for GradlePropertiesRewriter {
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
        params: &MigrationParams,
    ) -> Result<(String, Vec<Occurrence>), MigrationError> {
        rewrite_properties(content, params)
    }
}
