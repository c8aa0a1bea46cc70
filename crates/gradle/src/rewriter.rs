use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use glob::Pattern;
use mcmigrate_core::{
    MigrationError, MigrationParams, Occurrence, OccurrenceKind, SourceFile, SourceKind,
    SourceRewriter, SourceSet, TextEdit, apply_edits, line_number,
};

use crate::{
    classifier::VersionClassifier,
    literal_rewriter::{LiteralRewrite, rewrite_literal},
    scanner::scan_literals,
};

/// Rewrites version references in Groovy `build.gradle` scripts.
#[derive(Debug)]
pub struct GroovyBuildRewriter {
    sources: SourceSet,
}

impl GroovyBuildRewriter {
    /// # Errors
    /// Returns `InvalidPattern` if any glob does not compile.
    pub fn new(patterns: &[String]) -> Result<Self, MigrationError> {
        Ok(Self {
            sources: SourceSet::new(SourceKind::BuildScript, patterns)?,
        })
    }
}

/// Rewrites every accepted string literal of `content`, leaving all other bytes alone.
///
/// # Errors
/// Returns error if the classifier cannot be built or the edits do not splice cleanly.
pub fn rewrite_build_script(
    content: &str,
    params: &MigrationParams,
) -> Result<(String, Vec<Occurrence>), MigrationError> {
    let classifier = VersionClassifier::new(params.current())?;
    let mut edits = Vec::new();
    let mut occurrences = Vec::new();

    for literal in scan_literals(content) {
        let line = line_number(content, literal.span().start);
        match rewrite_literal(&literal, &classifier, params.target()) {
            LiteralRewrite::Unchanged => {}
            LiteralRewrite::Rejected => {
                tracing::debug!(line, literal = literal.value_source(), "not a version reference");
                occurrences.push(Occurrence::skipped(
                    line,
                    OccurrenceKind::Literal,
                    literal.value_source(),
                ));
            }
            LiteralRewrite::Updated(updated) => {
                tracing::debug!(
                    line,
                    before = literal.value_source(),
                    after = updated.value_source(),
                    "rewriting literal"
                );
                edits.push(TextEdit::new(
                    literal.span(),
                    literal.value_source(),
                    updated.value_source(),
                ));
                occurrences.push(Occurrence::replaced(
                    line,
                    OccurrenceKind::Literal,
                    literal.value_source(),
                    updated.value_source(),
                ));
            }
        }
    }

    Ok((apply_edits(content, &edits)?, occurrences))
}

#[async_trait]
impl SourceRewriter for GroovyBuildRewriter {
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
        rewrite_build_script(content, params)
    }
}
