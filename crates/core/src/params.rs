use crate::MigrationError;

/// The version pair driving a migration run.
///
/// Both versions are trimmed and must be non-empty. They are read-only for the
/// whole run and shared by every rewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationParams {
    current: String,
    target: String,
}

impl MigrationParams {
    /// # Errors
    /// Returns `MigrationError::EmptyVersion` if either version is empty after trimming.
    pub fn new(current: &str, target: &str) -> Result<Self, MigrationError> {
        let current = current.trim();
        let target = target.trim();
        if current.is_empty() {
            return Err(MigrationError::EmptyVersion { role: "current" });
        }
        if target.is_empty() {
            return Err(MigrationError::EmptyVersion { role: "target" });
        }
        Ok(Self {
            current: current.to_string(),
            target: target.to_string(),
        })
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// True when current and target are the same, so no file can change.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.current == self.target
    }
}
